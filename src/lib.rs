//! country-translator
//!
//! 国名データセットに対する対話型の参照ツール: データストア、コード変換、
//! 対話セッションを提供する。

pub mod cli;
pub mod codes;
pub mod session;
pub mod translator;

// Session を再エクスポート
pub use session::Session;
