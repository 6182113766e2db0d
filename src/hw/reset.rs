// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Reset cause from the RCC control/status register (RCC_CSR).

/// RCC_CSR reset flags.
pub mod csr {
    pub const LPWRRSTF: u32 = 1 << 31;
    pub const WWDGRSTF: u32 = 1 << 30;
    pub const IWDGRSTF: u32 = 1 << 29;
    pub const SFTRSTF: u32 = 1 << 28;
    pub const PORRSTF: u32 = 1 << 27;
    pub const PINRSTF: u32 = 1 << 26;
    /// Set by a brownout, and also by every power-on reset.
    pub const BORRSTF: u32 = 1 << 25;
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ResetCause {
    LowPower,
    WindowWatchdog,
    IndependentWatchdog,
    Software,
    PowerOn,
    Brownout,
    Pin,
    Unknown,
}

impl ResetCause {
    /// Decode the flags of one reset.
    ///
    /// Several flags are set together (every reset also pulls NRST, and power-on also sets
    /// BORRSTF), so they are checked from most to least specific.
    pub fn from_csr(bits: u32) -> Self {
        const ORDER: [(u32, ResetCause); 7] = [
            (csr::LPWRRSTF, ResetCause::LowPower),
            (csr::WWDGRSTF, ResetCause::WindowWatchdog),
            (csr::IWDGRSTF, ResetCause::IndependentWatchdog),
            (csr::SFTRSTF, ResetCause::Software),
            (csr::PORRSTF, ResetCause::PowerOn),
            (csr::BORRSTF, ResetCause::Brownout),
            (csr::PINRSTF, ResetCause::Pin),
        ];
        ORDER
            .iter()
            .find(|(flag, _)| bits & flag != 0)
            .map_or(ResetCause::Unknown, |&(_, cause)| cause)
    }

    /// Read the cause of the last reset and clear the flags so the next reset reports cleanly.
    #[cfg(feature = "board")]
    pub fn take() -> Self {
        use stm32f7xx_hal::pac;

        let rcc = unsafe { &*pac::RCC::ptr() };
        let cause = Self::from_csr(rcc.csr.read().bits());
        rcc.csr.modify(|_, w| w.rmvf().set_bit());
        cause
    }
}
