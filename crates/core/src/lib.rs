//! Face attribute labeling for inference pipelines.
//!
//! A pipeline host hands each frame to [`process_frame`], which decodes the
//! age, gender and emotion classifier tensors attached to every detected
//! face and writes the resulting labels back onto those tensors.

pub mod labeling {
    pub mod domain {
        pub mod attribute_label;
        pub mod frame_processor;
        pub mod label_decoder;
        pub mod label_error;
        pub mod tensor_kind;
    }
    pub mod label_deriver;
}

pub mod pipeline {
    pub mod label_frames_use_case;
    pub mod pipeline_logger;
}

pub mod shared {
    pub mod constants;
    pub mod frame;
    pub mod region;
    pub mod stream_metadata;
    pub mod tensor;
}

pub mod video {
    pub mod domain {
        pub mod frame_io_error;
        pub mod frame_reader;
        pub mod frame_writer;
    }
    pub mod infrastructure;
}

pub use labeling::label_deriver::process_frame;
