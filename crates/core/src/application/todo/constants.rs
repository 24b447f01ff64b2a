// Paging constants (no magic values)

/// Page size used when the caller passes `size == 0`
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Upper bound for a single page; larger requests are clamped
pub const MAX_PAGE_SIZE: u32 = 100;
