#![no_main]
use foreign_interop::{offset::slot_at, ByteOffset, Ptr};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (u8, u32)| {
    let (offset, value) = data;

    let mut instance = [0u8; 264];
    let offset = offset as usize;
    let base = instance.as_mut_ptr().cast();

    let slot = slot_at(base, ByteOffset(offset));
    assert_eq!(slot as usize, base as usize + offset, "Address mismatch");

    let field = Ptr::<u32>::from_raw(slot.cast());
    unsafe { field.write(value) };

    for (i, b) in instance.iter().enumerate() {
        if (offset..offset + 4).contains(&i) {
            assert_eq!(*b, value.to_ne_bytes()[i - offset], "Field byte {} wrong", i);
        } else {
            assert_eq!(*b, 0, "Byte {} outside the field changed", i);
        }
    }
});
