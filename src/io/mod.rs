// Purpose - file formats at the edge of the crate; nothing here touches synthesis

pub mod decode;
pub mod wav;

pub use decode::{load_wav, result_description, DecodeError, DecodedAudio, ResultCode};
pub use wav::{to_pcm_i16, write_wav};
