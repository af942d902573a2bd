#![no_main]
use foreign_interop::bytes::{copy_by_byte_raw, move_by_byte_raw};
use libfuzzer_sys::fuzz_target;

const REGION: usize = 32;

fuzz_target!(|data: ([u8; 96], u8, u8)| {
    let (mut buffer, src_idx, dst_idx) = data;

    // Any placement of two 32-byte regions in the buffer, overlapping or not.
    let src = (src_idx as usize) % (buffer.len() - REGION + 1);
    let dst = (dst_idx as usize) % (buffer.len() - REGION + 1);

    let mut expected = [0u8; REGION];
    expected.copy_from_slice(&buffer[src..src + REGION]);
    let untouched: Vec<(usize, u8)> = buffer
        .iter()
        .copied()
        .enumerate()
        .filter(|&(i, _)| !(dst..dst + REGION).contains(&i) && !(src..src + REGION).contains(&i))
        .collect();

    let base = buffer.as_mut_ptr();
    unsafe { move_by_byte_raw::<REGION>(base.add(src).cast(), base.add(dst).cast()) };

    assert_eq!(&buffer[dst..dst + REGION], &expected[..], "Move mismatch src={} dst={}", src, dst);
    for (i, b) in untouched {
        assert_eq!(buffer[i], b, "Byte {} outside both regions changed", i);
    }

    // Disjoint regions must also agree with the non-overlapping copy.
    if src + REGION <= dst || dst + REGION <= src {
        let mut copied = [0u8; REGION];
        unsafe { copy_by_byte_raw::<REGION>(base.add(dst).cast(), copied.as_mut_ptr().cast()) };
        assert_eq!(copied, expected);
    }
});
