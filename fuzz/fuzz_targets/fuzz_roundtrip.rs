#![no_main]
use libfuzzer_sys::fuzz_target;
use zenpbm::*;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, re-encoding under the same tag and decoding again
    // must produce an identical image
    let limits = Limits {
        max_pixels: Some(1 << 20),
        ..Default::default()
    };
    let Ok(decoded) = DecodeRequest::new(data)
        .with_limits(&limits)
        .decode(enough::Unstoppable)
    else {
        return;
    };

    let reencoded = match &decoded {
        AnyRaster::Bitmap(r) => encode(r, enough::Unstoppable),
        AnyRaster::Graymap(r) => encode(r, enough::Unstoppable),
        AnyRaster::Pixmap(r) => encode(r, enough::Unstoppable),
    };
    let Ok(reencoded) = reencoded else {
        panic!("decoded image failed to encode");
    };
    let Ok(decoded2) = decode(&reencoded, enough::Unstoppable) else {
        panic!("re-encoded data failed to decode");
    };

    assert_eq!(decoded, decoded2, "roundtrip mismatch");
});
