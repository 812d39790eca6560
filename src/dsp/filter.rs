/*
| output    | formula                         | passes           |
| --------- | ------------------------------- | ---------------- |
| low-pass  | lp[i] = lp[i-1]*a + x[i]*(1-a)  | slow movement    |
| high-pass | hp[i] = x[i] - lp[i]            | what lp rejected |
*/

/// Both halves of the complementary pair for one input sample.
#[derive(Debug, Clone, Copy)]
pub struct SplitOutputs {
    pub lowpass: f64,
    pub highpass: f64,
}

/// One-pole smoothing filter with a complementary high-pass.
///
/// `coefficient` is the feedback amount `a` in (0, 1): larger values smooth
/// harder. The high-pass is the input minus the low-pass of that same
/// sample, so `lowpass + highpass == input` for every sample.
#[derive(Debug, Clone)]
pub struct OnePole {
    coefficient: f64,
    state: f64, // previous lowpass output
}

impl OnePole {
    pub fn new(coefficient: f64) -> Self {
        debug_assert!(
            coefficient > 0.0 && coefficient < 1.0,
            "smoothing coefficient must lie in (0, 1)"
        );
        Self {
            coefficient,
            state: 0.0,
        }
    }

    #[inline]
    pub fn lowpass(&mut self, input: f64) -> f64 {
        self.state = self.state * self.coefficient + input * (1.0 - self.coefficient);
        self.state
    }

    #[inline]
    pub fn split(&mut self, input: f64) -> SplitOutputs {
        let lowpass = self.lowpass(input);
        SplitOutputs {
            lowpass,
            highpass: input - lowpass,
        }
    }
}
