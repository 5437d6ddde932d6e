//! Flat buffer protocol for zero-copy frame transfer
//!
//! Binary format for the preview frame list:
//!
//! ## u32 Buffer Layout:
//! ```text
//! Header:
//! [0]     MAGIC (0x56544145 = "VTAE" for validation)
//! [1]     SCHEMA_VERSION (protocol version, currently 1)
//! [2]     version_lo (layout version)
//! [3]     version_hi (layout version)
//! [4]     frame_count
//! [5]     label_buffer_len (synced in finalize())
//! [6..]   frame data...
//!
//! Per-frame: [frame_index, label_offset, label_len]
//!   label_offset/label_len: byte offsets in label_data (UTF-8)
//! ```
//!
//! ## f32 Buffer Layout:
//! ```text
//! Per-frame: [stack_y, window_start, window_end, content_shift, clip_y, clip_height]
//!   stack_y: frame top in the stacked preview column
//!   window_start/window_end: content-space slice this frame shows
//!   content_shift: translateY the host applies to its content copy
//!   clip_y/clip_height: clip rect in frame-local coordinates
//!     (clip x and width are the left margin and content width, which the
//!      host already knows from the geometry)
//! ```

use crate::paginate::PageWindow;

/// Magic number for format validation: "VTAE"
pub const MAGIC: u32 = 0x56544145;

/// Schema version for protocol compatibility checking
pub const SCHEMA_VERSION: u32 = 1;

/// Header size in u32 elements
pub const HEADER_SIZE: usize = 6;

/// Number of u32 values per frame
/// [frame_index, label_offset, label_len]
pub const U32_PER_FRAME: usize = 3;

/// Number of f32 values per frame
/// [stack_y, window_start, window_end, content_shift, clip_y, clip_height]
pub const F32_PER_FRAME: usize = 6;

/// Frame buffer for zero-copy WASM transfer
pub struct FrameBuffer {
    /// Integer data (indices, counts, offsets)
    pub u32_data: Vec<u32>,
    /// Float data (positions, dimensions)
    pub f32_data: Vec<f32>,
    /// UTF-8 page label buffer
    pub label_data: Vec<u8>,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self {
            u32_data: Vec::with_capacity(64),
            f32_data: Vec::with_capacity(64),
            label_data: Vec::with_capacity(256),
        }
    }

    pub fn clear(&mut self) {
        self.u32_data.clear();
        self.f32_data.clear();
        self.label_data.clear();
    }

    /// Pre-allocate buffers to avoid reallocation during encoding.
    /// Critical: JS holds pointers to these buffers, so realloc would cause invalid pointers.
    ///
    /// Call this before write_header() with the frame count and the total
    /// label byte length.
    pub fn prepare(&mut self, frame_count: usize, label_bytes: usize) {
        // Target capacities with headroom
        let u32_target = HEADER_SIZE + frame_count * U32_PER_FRAME + 8;
        let f32_target = frame_count * F32_PER_FRAME + 8;
        let label_target = label_bytes + 64;

        // Reuse buffers if capacity is sufficient (avoids malloc/free on every frame)
        if self.u32_data.capacity() < u32_target {
            self.u32_data = Vec::with_capacity(u32_target);
        } else {
            self.u32_data.clear();
        }

        if self.f32_data.capacity() < f32_target {
            self.f32_data = Vec::with_capacity(f32_target);
        } else {
            self.f32_data.clear();
        }

        if self.label_data.capacity() < label_target {
            self.label_data = Vec::with_capacity(label_target);
        } else {
            self.label_data.clear();
        }
    }

    /// Write header; the layout version is split for 32-bit readers
    pub fn write_header(&mut self, version: u64, frame_count: u32) {
        self.u32_data.push(MAGIC);                         // [0] magic number
        self.u32_data.push(SCHEMA_VERSION);                // [1] schema version
        self.u32_data.push((version & 0xFFFFFFFF) as u32); // [2] version_lo
        self.u32_data.push((version >> 32) as u32);        // [3] version_hi
        self.u32_data.push(frame_count);                   // [4] frame_count
        self.u32_data.push(0);                             // [5] label_buffer_len (placeholder)
    }

    /// Write one frame record
    pub fn push_frame(
        &mut self,
        frame_index: usize,
        stack_y: f32,
        window: PageWindow,
        content_shift: f32,
        clip_y: f32,
        clip_height: f32,
        label: &str,
    ) {
        // Write label to buffer and record offset
        let label_offset = self.label_data.len() as u32;
        self.label_data.extend_from_slice(label.as_bytes());

        // u32: frame_index, label_offset, label_len
        self.u32_data.push(frame_index as u32);
        self.u32_data.push(label_offset);
        self.u32_data.push(label.len() as u32);

        // f32: stack_y, window_start, window_end, content_shift, clip_y, clip_height
        self.f32_data.push(stack_y);
        self.f32_data.push(window.start);
        self.f32_data.push(window.end);
        self.f32_data.push(content_shift);
        self.f32_data.push(clip_y);
        self.f32_data.push(clip_height);
    }

    /// Finalize buffer: synchronize the header with what was written.
    /// Must be called after all frame records.
    pub fn finalize(&mut self) {
        if self.u32_data.len() < HEADER_SIZE {
            return;
        }

        // Sync label buffer length
        self.u32_data[5] = self.label_data.len() as u32;

        // Debug validation: verify all label offsets are within bounds
        #[cfg(debug_assertions)]
        self.validate_label_offsets();
    }

    /// Validate that all label offsets are within bounds (debug builds only)
    #[cfg(debug_assertions)]
    fn validate_label_offsets(&self) {
        let frame_count = self.u32_data[4] as usize;
        let label_len = self.label_data.len();

        for frame_idx in 0..frame_count {
            let idx = HEADER_SIZE + frame_idx * U32_PER_FRAME;
            if idx + U32_PER_FRAME > self.u32_data.len() {
                break;
            }

            let label_offset = self.u32_data[idx + 1] as usize;
            let label_length = self.u32_data[idx + 2] as usize;

            debug_assert!(
                label_offset + label_length <= label_len,
                "Invalid label range for frame {}: offset {} + length {} > label buffer size {}",
                frame_idx,
                label_offset,
                label_length,
                label_len
            );
        }
    }

    // Accessors for WASM
    // Return u32 instead of usize for explicit WASM contract (wasm32 linear memory uses u32 offsets)

    pub fn u32_ptr(&self) -> u32 {
        self.u32_data.as_ptr() as u32
    }

    pub fn u32_len(&self) -> u32 {
        self.u32_data.len() as u32
    }

    pub fn f32_ptr(&self) -> u32 {
        self.f32_data.as_ptr() as u32
    }

    pub fn f32_len(&self) -> u32 {
        self.f32_data.len() as u32
    }

    pub fn label_ptr(&self) -> u32 {
        self.label_data.as_ptr() as u32
    }

    pub fn label_len(&self) -> u32 {
        self.label_data.len() as u32
    }
}
