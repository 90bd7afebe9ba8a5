/*
Declicking Ramp
===============

A ramp walks a value toward a target in equal steps, one step per sample,
and lands exactly on the target. It is the smallest building block of
parameter automation: every segment between two host breakpoints is one
ramp.

Vocabulary
----------

  current     The value the ramp outputs right now.

  target      Where the ramp is heading. Reached in at most `num_steps`
              ticks.

  step        How far `current` moves per tick. Always computed as a
              magnitude; the direction comes from comparing current and
              target on every tick.

  tick        One advance of the ramp. Called once per audio frame.


The Shape
---------

    target ┤            ●───────
           │         ●
           │      ●
           │   ●
   current ┼●
           └──┬──┬──┬──┬──┬──→ ticks
              1  2  3  4  5

A ramp from 0.6 to 1.0 over 4 steps moves by 0.1 per tick and then stays.


The Math
--------

    step = |target - current| / num_steps

Each tick:

    diff = target - current
    if diff >  step  →  current += step
    if diff < -step  →  current -= step
    otherwise        →  current  = target    (snap)

The snap is what makes the ramp finish. Without it, accumulated rounding
would leave `current` a hair away from `target` and the ramp would never
report done. Because of the snap, `is_done()` can compare with `==`.

A zero step count would divide by zero; it is treated as one step, so the
target is reached on the very next tick.
*/

/// Linear ramp from a current value toward a target, clamped on arrival.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ramp {
    current: f32,
    target: f32,
    step: f32,    // magnitude moved per tick
    num_steps: i32, // nominal duration, never zero
}

impl Ramp {
    pub fn new(initial: f32, target: f32, num_steps: i32) -> Self {
        let num_steps = if num_steps == 0 { 1 } else { num_steps };
        let step = (target - initial).abs() / num_steps as f32;

        Self {
            current: initial,
            target,
            step,
            num_steps,
        }
    }

    /// A ramp that already sits on `value`.
    pub fn flat(value: f32) -> Self {
        Self::new(value, value, 0)
    }

    /// Advance one step toward the target and return the new value.
    #[inline]
    pub fn tick(&mut self) -> f32 {
        let diff = self.target - self.current;
        if diff > self.step {
            self.current += self.step;
        } else if diff < -self.step {
            self.current -= self.step;
        } else {
            self.current = self.target;
        }

        self.current
    }

    /// Render a block of ramp values into the buffer.
    pub fn render(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = self.tick();
        }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn num_steps(&self) -> i32 {
        self.num_steps
    }

    /// Exact comparison; reachable because `tick` snaps onto the target.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.current == self.target
    }
}
