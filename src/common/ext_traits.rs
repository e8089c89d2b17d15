/// Little-endian reads at arbitrary positions of a byte slice, yielding
/// `None` instead of panicking when the value would run past the end
pub(crate) trait LeBytesExt {
    fn le_u16_at(&self, pos: usize) -> Option<u16>;

    fn le_i16_at(&self, pos: usize) -> Option<i16>;

    fn le_u32_at(&self, pos: usize) -> Option<u32>;

    fn byte_at(&self, pos: usize) -> Option<u8>;
}

impl LeBytesExt for [u8] {
    fn le_u16_at(&self, pos: usize) -> Option<u16> {
        let bytes = self.get(pos..pos.checked_add(2)?)?;
        Some(u16::from_le_bytes(bytes.try_into().ok()?))
    }

    fn le_i16_at(&self, pos: usize) -> Option<i16> {
        let bytes = self.get(pos..pos.checked_add(2)?)?;
        Some(i16::from_le_bytes(bytes.try_into().ok()?))
    }

    fn le_u32_at(&self, pos: usize) -> Option<u32> {
        let bytes = self.get(pos..pos.checked_add(4)?)?;
        Some(u32::from_le_bytes(bytes.try_into().ok()?))
    }

    fn byte_at(&self, pos: usize) -> Option<u8> {
        self.get(pos).copied()
    }
}
