use bitflags::bitflags;

bitflags! {
    /// Whole-pattern matching modes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        const IGNORE_CASE = 1 << 0;
        const MULTILINE = 1 << 1;
    }
}

impl Flags {
    pub fn ignore_case(self) -> bool {
        self.contains(Self::IGNORE_CASE)
    }

    pub fn multiline(self) -> bool {
        self.contains(Self::MULTILINE)
    }
}
