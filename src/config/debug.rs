//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log the snapshot fetch lifecycle (request, record count, failures).
    pub log_fetch: bool,

    /// Log every sort/filter transition in the table state.
    pub log_table_events: bool,
}

pub const DF: LogFlags = LogFlags {
    log_fetch: true,
    log_table_events: false,
};
