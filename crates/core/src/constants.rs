/// Currency symbol used by every formatted amount
pub const CURRENCY_SYMBOL: &str = "$";

/// Digit grouping separator for formatted amounts
pub const THOUSANDS_SEPARATOR: char = ',';

/// Title printed at the top of every report
pub const REPORT_TITLE: &str = "Net Worth Report";

/// Label for the headline figure of a report
pub const NET_WORTH_LABEL: &str = "Total Net Worth";

/// File name (without extension) of an exported report
pub const REPORT_FILE_STEM: &str = "net-worth-report";

/// Character width of a plain-text report page
pub const REPORT_PAGE_WIDTH: usize = 60;

/// First id handed out in each item list
pub const FIRST_ITEM_ID: u32 = 1;
