#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Auto-detect decode and header probe must never panic
    let _ = zenpbm::decode(data, enough::Unstoppable);
    let _ = zenpbm::ImageInfo::from_bytes(data);

    // Typed decode must never panic either
    let request = zenpbm::DecodeRequest::new(data);
    let _ = request.decode_as::<bool>(enough::Unstoppable);
    let _ = request.decode_as::<u8>(enough::Unstoppable);
    let _ = request.decode_as::<zenpbm::RGB8>(enough::Unstoppable);
});
