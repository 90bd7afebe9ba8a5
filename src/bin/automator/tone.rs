use std::f32::consts::TAU;

/// Sine test tone. Fixed level so every change in loudness is the gain.
pub struct TestTone {
    phase: f32,     // 0.0..1.0
    increment: f32, // phase advance per sample
    level: f32,
}

impl TestTone {
    pub fn new(frequency: f32, sample_rate: f32, level: f32) -> Self {
        Self {
            phase: 0.0,
            increment: frequency / sample_rate,
            level,
        }
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    pub fn render(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = (self.phase * TAU).sin() * self.level;
            self.phase += self.increment;
            if self.phase >= 1.0 {
                self.phase -= 1.0;
            }
        }
    }
}
