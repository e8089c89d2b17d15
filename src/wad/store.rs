use std::boxed::Box;
use std::collections::btree_map::{self, BTreeMap};
use std::string::String;

use crate::common::{name_to_bytes, slice_to_string};
use crate::error::{BinParse, BinParseResult};
use crate::lump::{self, Image, Palette, Sound};
use crate::wad::parser::{is_level_marker, SPRITE_END, SPRITE_START};
use crate::wad::WadKind;

/// Classification of a lump, derived from the marker range it was found in
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, PartialOrd, Ord)]
pub enum Category {
    #[default]
    Plain,
    Sprite,
}

/// A named blob of raw bytes.  The name is always 1 to 8 upper-case ASCII
/// characters, and never one the loader reads as a marker.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Lump {
    name: String,
    data: Box<[u8]>,
    category: Category,
}

impl Lump {
    pub fn new(
        name: &str,
        data: impl Into<Box<[u8]>>,
        category: Category,
    ) -> BinParseResult<Self> {
        Ok(Lump {
            name: lump_name(name)?,
            data: data.into(),
            category,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &[u8] {
        &self.data[..]
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    /// Give the lump a new name, e.g. so that it substitutes for another lump
    /// once inserted into a store
    pub fn set_name(&mut self, name: &str) -> BinParseResult<()> {
        self.name = lump_name(name)?;
        Ok(())
    }

    pub fn into_data(self) -> Box<[u8]> {
        self.data
    }

    pub fn to_palette(&self) -> BinParseResult<Palette> {
        lump::parse_palette(&self.data)
    }

    pub fn to_image(&self, palette: &Palette) -> BinParseResult<Image> {
        lump::parse_picture(&self.data, palette)
    }

    pub fn to_sound(&self) -> BinParseResult<Sound> {
        lump::parse_sound(&self.data)
    }
}

/// Lumps addressable by name.
///
/// Inserting a lump whose name is already present replaces the previous lump
/// (last write wins).  Iteration is in lexicographic order of names.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct LumpStore {
    kind: WadKind,
    lumps: BTreeMap<String, Lump>,
}

impl LumpStore {
    /// Empty store which serializes as a patch WAD
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kind(kind: WadKind) -> Self {
        LumpStore {
            kind,
            lumps: BTreeMap::new(),
        }
    }

    pub fn kind(&self) -> WadKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: WadKind) {
        self.kind = kind;
    }

    /// Add a lump, returning the lump it replaced if one had the same name
    pub fn insert(&mut self, lump: Lump) -> Option<Lump> {
        self.lumps.insert(lump.name.clone(), lump)
    }

    pub fn get(&self, name: &str) -> Option<&Lump> {
        self.lumps.get(&normalize(name))
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Lump> {
        self.lumps.get_mut(&normalize(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lumps.contains_key(&normalize(name))
    }

    pub fn remove(&mut self, name: &str) -> Option<Lump> {
        self.lumps.remove(&normalize(name))
    }

    /// Move the lump named `from` to the name `to`.  Returns the lump that
    /// previously held `to`, if any.  Renaming a missing lump is a no-op.
    pub fn rename(
        &mut self,
        from: &str,
        to: &str,
    ) -> BinParseResult<Option<Lump>> {
        let to_name = lump_name(to)?;

        let mut lump = match self.remove(from) {
            Some(lump) => lump,
            None => return Ok(None),
        };

        lump.name = to_name;
        Ok(self.insert(lump))
    }

    pub fn len(&self) -> usize {
        self.lumps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lumps.is_empty()
    }

    /// Lump names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.lumps.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Values<'_, String, Lump> {
        self.lumps.values()
    }

    /// Lumps of one category, in sorted order of names
    pub fn by_category(
        &self,
        category: Category,
    ) -> impl Iterator<Item = &Lump> {
        self.iter().filter(move |lump| lump.category == category)
    }
}

impl<'a> IntoIterator for &'a LumpStore {
    type Item = &'a Lump;
    type IntoIter = btree_map::Values<'a, String, Lump>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Lump> for LumpStore {
    fn extend<I: IntoIterator<Item = Lump>>(&mut self, iter: I) {
        for lump in iter {
            self.insert(lump);
        }
    }
}

// Marker names would be read back as structure rather than as a lump
fn lump_name(name: &str) -> BinParseResult<String> {
    let name = slice_to_string(&name_to_bytes(name)?);

    if name == SPRITE_START || name == SPRITE_END || is_level_marker(&name) {
        return Err(BinParse::InvalidName(format!(
            "`{name}` is reserved for markers"
        )));
    }

    Ok(name)
}

fn normalize(name: &str) -> String {
    name.to_ascii_uppercase()
}
