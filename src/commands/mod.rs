pub mod sort;

pub type CmdResult<T> = mdlist::Result<(T, i32)>;
