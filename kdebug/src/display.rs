//! `Display` adapters for dumps.

use core::fmt::{self, Display, Formatter};

use crate::{Dumper, Inspect};

/// Displays a value as its dump.
pub struct DumpDisplay<'a> {
    pub(crate) value: &'a dyn Inspect,
    pub(crate) dumper: Dumper,
}

impl Display for DumpDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.dumper.format_to(self.value, f)
    }
}

/// Extension trait to dump any [`Inspect`] value through `{}`.
pub trait InspectExt: Inspect {
    /// Get a displayable wrapper that dumps this value
    fn dump_display(&self) -> DumpDisplay<'_>;

    /// Get a displayable wrapper with custom dumper settings
    fn dump_display_with(&self, dumper: Dumper) -> DumpDisplay<'_>;
}

impl<T: Inspect> InspectExt for T {
    fn dump_display(&self) -> DumpDisplay<'_> {
        self.dump_display_with(Dumper::new())
    }

    fn dump_display_with(&self, dumper: Dumper) -> DumpDisplay<'_> {
        DumpDisplay {
            value: self,
            dumper,
        }
    }
}
