//! UseCase 層
//!
//! 接続のライフサイクルイベントを受け取り、Domain 層を操作します。
//! 送信先（FrameSink）と出力先（EventReporter）は trait として定義し、
//! Infrastructure 層と UI 層が実装します。

pub mod create_room;
pub mod error;
pub mod event;

pub use create_room::{CreateRoomSession, FrameSink};
pub use error::{SessionError, TransportError};
pub use event::{ClientEvent, EventReporter};
