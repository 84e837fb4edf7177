//! Sample input abstraction.
//!
//! The `SampleSource` trait is the pipeline's input boundary: any handle
//! that can yield successive batches of decoded mono f32 samples plus the
//! metadata needed to derive window sizes. Hosts wrap their decoder
//! (WAV reader, ffmpeg pipe, in-memory buffer) behind it.

/// Pull-model handle over a finite mono sample stream.
///
/// Implementors may be stateful (file cursors, decoder buffers). The
/// pipeline reads the stream exactly once, front to back.
pub trait SampleSource {
    /// Sample rate of the stream in Hz.
    fn sample_rate(&self) -> u32;

    /// Total number of sample frames in the stream.
    fn total_frames(&self) -> u64;

    /// Read up to `buf.len()` samples into `buf`, returning how many were
    /// written. Returns 0 at end of stream.
    fn read(&mut self, buf: &mut [f32]) -> usize;
}

/// `SampleSource` over an in-memory sample buffer.
///
/// The pipeline never mutates or retains the samples beyond a run; only a
/// read cursor is kept here.
#[derive(Debug)]
pub struct BufferSource<'a> {
    samples: &'a [f32],
    sample_rate: u32,
    pos: usize,
}

impl<'a> BufferSource<'a> {
    pub fn new(samples: &'a [f32], sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
            pos: 0,
        }
    }
}

impl SampleSource for BufferSource<'_> {
    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn total_frames(&self) -> u64 {
        self.samples.len() as u64
    }

    fn read(&mut self, buf: &mut [f32]) -> usize {
        let remaining = self.samples.len() - self.pos;
        let n = remaining.min(buf.len());
        buf[..n].copy_from_slice(&self.samples[self.pos..self.pos + n]);
        self.pos += n;
        n
    }
}
