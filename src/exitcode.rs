//! Process exit codes of `lineage`, taken from BSD sysexits.h

/// Bad arguments, or a curry run that ended with arguments still missing
pub const USAGE: i32 = 64;

/// Record file rejected: unparsable, cyclic, or malformed under `strict`;
/// also a fold that overflowed
pub const DATAERR: i32 = 65;

/// Record file missing or unreadable
pub const NOINPUT: i32 = 66;

/// Working directory could not be resolved
pub const IOERR: i32 = 74;

/// Settings file or `LINEAGE_*` variable rejected
pub const CONFIG: i32 = 78;
