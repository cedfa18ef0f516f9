use std::time::Duration;

/// Side effect requested by the state machine, executed by the driver.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    /// Replace the pending debounce deadline.
    ScheduleFetch(Duration),
    /// Start a fetch for `page` under `generation`.
    Fetch { generation: u64, page: u32 },
}
