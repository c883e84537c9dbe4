use bitflags::bitflags;

bitflags! {
    /// Bits of the status register
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StatusFlags: u8 {
        const INCORRECT_TARING_RANGE = 0b1000_0000;
        const INCORRECT_TARING = 0b0100_0000;
        /// Set while the watchdog timer is running
        const WATCHDOG_TIMER = 0b0010_0000;
        const OVERVOLTAGE = 0b0000_0010;
        /// Readings are not settled yet and should not be used
        const UNSTEADY_PROCESS = 0b0000_0001;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum StatusWarning {
    #[strum(to_string = "Incorrect taring range detected")]
    IncorrectTaringRange,

    #[strum(to_string = "Incorrect taring detected")]
    IncorrectTaring,

    #[strum(to_string = "Watchdog disabled")]
    WatchdogDisabled,

    #[strum(to_string = "Overvoltage detected")]
    Overvoltage,
}

impl StatusFlags {
    pub fn from_register(raw: u8) -> Self {
        Self::from_bits_retain(raw)
    }

    /// Warnings the status byte raises, independent of [`Self::is_unsteady`]
    pub fn warnings(&self) -> Vec<StatusWarning> {
        let mut warnings = Vec::new();

        if self.contains(Self::INCORRECT_TARING_RANGE) {
            warnings.push(StatusWarning::IncorrectTaringRange);
        }

        if self.contains(Self::INCORRECT_TARING) {
            warnings.push(StatusWarning::IncorrectTaring);
        }

        if !self.contains(Self::WATCHDOG_TIMER) {
            warnings.push(StatusWarning::WatchdogDisabled);
        }

        if self.contains(Self::OVERVOLTAGE) {
            warnings.push(StatusWarning::Overvoltage);
        }

        warnings
    }

    pub fn is_unsteady(&self) -> bool {
        self.contains(Self::UNSTEADY_PROCESS)
    }
}
