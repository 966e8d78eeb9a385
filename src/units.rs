use derive_more::{Add, AddAssign, Deref, Display, From, Into, Mul, Sub};

/// A length in PDF points (1/72 of an inch)
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, AddAssign, Sub, Mul, Deref, Display, From, Into)]
#[display("{_0}pt")]
pub struct Pt(pub f32);

/// A length in inches
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, Mul, Deref, Display, From, Into)]
#[display("{_0}in")]
pub struct In(pub f32);

impl From<In> for Pt {
    fn from(i: In) -> Self {
        Pt(*i * 72.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_to_points() {
        assert_eq!(Pt::from(In(0.5)), Pt(36.0));
        assert_eq!(Pt(2.0) + Pt(1.0) * 3.0, Pt(5.0));
        assert_eq!(Pt(1.5).to_string(), "1.5pt");
    }
}
