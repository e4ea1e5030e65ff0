//! Ring buffer delay line.

/// A fixed-size ring buffer for integer-sample delays.
#[derive(Debug, Clone)]
pub struct DelayLine {
    buffer: Vec<f64>,
    write_pos: usize,
}

impl DelayLine {
    /// Creates a delay line holding up to `max_samples` of history.
    pub fn new(max_samples: usize) -> Self {
        Self {
            buffer: vec![0.0; max_samples.max(1)],
            write_pos: 0,
        }
    }

    /// Writes a sample and advances the write position.
    pub fn write(&mut self, sample: f64) {
        self.buffer[self.write_pos] = sample;
        self.write_pos = (self.write_pos + 1) % self.buffer.len();
    }

    /// Reads the sample written `delay_samples` writes ago (1 = most recent).
    pub fn read(&self, delay_samples: usize) -> f64 {
        let len = self.buffer.len();
        let read_pos = (self.write_pos + len - delay_samples % len) % len;
        self.buffer[read_pos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_line_basic() {
        let mut dl = DelayLine::new(10);
        for i in 0..5 {
            dl.write(i as f64);
        }

        assert!((dl.read(1) - 4.0).abs() < 1e-10);
        assert!((dl.read(5) - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_delay_line_wrap_around() {
        let mut dl = DelayLine::new(4);
        for i in 0..10 {
            dl.write(i as f64);
        }

        // The last 4 samples written are 6, 7, 8, 9
        assert!((dl.read(1) - 9.0).abs() < 1e-10);
        assert!((dl.read(4) - 6.0).abs() < 1e-10);
    }
}
