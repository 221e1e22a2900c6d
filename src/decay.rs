use crate::{Error, Result};

/// A scalar that decays over time, such as an exploration rate decaying over episodes
pub trait Decay {
    /// Calculate value at time `t`
    fn evaluate(&self, t: f32) -> f32;
}

fn validate(rate: f32, vi: f32, vf: f32) -> Result<()> {
    if (rate >= 0.0 && vi > vf) || (rate < 0.0 && vi < vf) {
        Ok(())
    } else {
        Err(Error::InvalidDecay(format!(
            "`vi - vf` ({vi} - {vf}) must have same sign as `rate` ({rate})"
        )))
    }
}

/// v(t) = v<sub>f</sub> + (v<sub>i</sub> - v<sub>f</sub>) * e<sup>-rt</sup>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Exponential {
    rate: f32,
    vi: f32,
    vf: f32,
}

impl Exponential {
    pub fn new(rate: f32, vi: f32, vf: f32) -> Result<Self> {
        validate(rate, vi, vf)?;
        Ok(Self { rate, vi, vf })
    }
}

impl Decay for Exponential {
    fn evaluate(&self, t: f32) -> f32 {
        let &Self { rate, vi, vf } = self;
        vf + (vi - vf) * (-rate * t).exp()
    }
}

/// v(t) = v<sub>f</sub> + (v<sub>i</sub> - v<sub>f</sub>) / (1 + rt)
///
/// With `rate = 1`, `vi = 1` and `vf = 0` this is the GLIE schedule 1/(t+1).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InverseTime {
    rate: f32,
    vi: f32,
    vf: f32,
}

impl InverseTime {
    pub fn new(rate: f32, vi: f32, vf: f32) -> Result<Self> {
        validate(rate, vi, vf)?;
        Ok(Self { rate, vi, vf })
    }

    /// The harmonic schedule 1/(t+1), which reaches 0 only in the limit
    pub fn harmonic() -> Self {
        Self {
            rate: 1.0,
            vi: 1.0,
            vf: 0.0,
        }
    }
}

impl Decay for InverseTime {
    fn evaluate(&self, t: f32) -> f32 {
        let &Self { rate, vi, vf } = self;
        vf + (vi - vf) / (1.0 + rate * t)
    }
}

/// v(t) = max(v<sub>i</sub> - rt, v<sub>f</sub>)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Linear {
    rate: f32,
    vi: f32,
    vf: f32,
}

impl Linear {
    pub fn new(rate: f32, vi: f32, vf: f32) -> Result<Self> {
        validate(rate, vi, vf)?;
        Ok(Self { rate, vi, vf })
    }
}

impl Decay for Linear {
    fn evaluate(&self, t: f32) -> f32 {
        let &Self { rate, vi, vf } = self;
        (vi - rate * t).max(vf)
    }
}
