//! Polarisation states.

use std::fmt;

/// One of the three sky-signal components a parameter or map may carry.
///
/// Values that carry a single state are stored for [`Stokes::I`] and
/// broadcast across all states.
///
/// # Example
///
/// ```
/// use bandpass_core::types::Stokes;
///
/// assert_eq!(Stokes::for_count(3), &[Stokes::I, Stokes::Q, Stokes::U]);
/// assert_eq!(Stokes::for_count(1), &[Stokes::I]);
/// assert_eq!(Stokes::Q.index(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stokes {
    /// Total intensity
    I,
    /// Linear polarisation, Q
    Q,
    /// Linear polarisation, U
    U,
}

impl Stokes {
    /// All states in storage order.
    pub const ALL: [Stokes; 3] = [Stokes::I, Stokes::Q, Stokes::U];

    /// Row index of this state.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Stokes::I => 0,
            Stokes::Q => 1,
            Stokes::U => 2,
        }
    }

    /// State stored at row `index`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// States present in a quantity carrying `count` rows.
    ///
    /// Any count other than 3 is treated as intensity-only.
    pub fn for_count(count: usize) -> &'static [Stokes] {
        if count == 3 {
            &Self::ALL
        } else {
            &Self::ALL[..1]
        }
    }
}

impl fmt::Display for Stokes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Stokes::I => "I",
            Stokes::Q => "Q",
            Stokes::U => "U",
        };
        write!(f, "{}", label)
    }
}
