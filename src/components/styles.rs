//! Class lists for the profile card regions.
//!
//! Components reference these by region name and never build class strings inline.

pub const CARD: &str = "bg-card border border-border rounded-xl p-6 shadow-sm max-w-md w-full";

pub const HEADER: &str = "flex items-center justify-between gap-4 mb-4";

pub const NAME: &str = "text-xl font-bold truncate";

pub const EDIT_BUTTON: &str = "px-4 py-2 bg-primary text-primary-foreground rounded-lg hover:opacity-90 transition text-sm font-medium";

pub const DETAILS: &str = "space-y-3";

pub const FIELD: &str = "flex flex-col gap-1";

pub const LABEL: &str = "text-xs font-semibold uppercase text-muted-foreground";

pub const VALUE: &str = "text-sm break-words";
