use doom_util::wad::{self, Category, LoadOptions};
use doom_util::{Image, Palette, Sound};

use std::env::args;
use std::fs::{create_dir_all, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use byteorder::{LittleEndian, WriteBytesExt};
use png::{ColorType, Encoder};

fn main() {
    let mut arguments = args().skip(1);

    let wad_path = if let Some(wad_path) = arguments.next() {
        wad_path
    } else {
        panic!("No arguments");
    };

    let file = File::open(wad_path).expect("Could not open file");
    let mut reader = BufReader::new(file);

    let options = LoadOptions {
        exclude_map_data: true,
    };

    let store = wad::load(&mut reader, options).unwrap();

    let palette = store
        .get("PLAYPAL")
        .expect("No PLAYPAL lump")
        .to_palette()
        .unwrap();

    println!("Writing palette...");
    write_png("PLAYPAL", &palette.to_image());

    for lump in &store {
        let name = lump.name();

        if lump.category() == Category::Sprite {
            match lump.to_image(&palette) {
                Ok(image) => {
                    println!("Writing sprite {name}...");
                    write_png(name, &image);
                }
                Err(e) => eprintln!("`{name}`: {e}"),
            }
        } else if name.starts_with("DS") {
            match lump.to_sound() {
                Ok(sound) => {
                    println!("Writing sound {name}...");
                    write_wav(name, &sound);
                }
                Err(e) => eprintln!("`{name}`: {e}"),
            }
        }
    }

    write_substitutes(&store, &palette);
}

// Swap the pistol sound and sprite for other lumps, as a patch WAD
fn write_substitutes(store: &wad::LumpStore, palette: &Palette) {
    let mut patch = wad::LumpStore::new();

    for (from, to) in [("DSPLPAIN", "DSPISTOL"), ("CHGGA0", "PISGA0")] {
        if let Some(lump) = store.get(from) {
            let mut lump = lump.clone();
            lump.set_name(to).unwrap();
            patch.insert(lump);
        } else {
            eprintln!("No `{from}` lump to substitute");
        }
    }

    if let Some(Ok(image)) = patch.get("PISGA0").map(|l| l.to_image(palette)) {
        println!("Pistol sprite is now {}x{}", image.width(), image.height());
    }

    let bytes = wad::serialize(&patch).unwrap();
    new_writer("out.wad").write_all(&bytes).unwrap();
    println!("Wrote patch with {} lumps", patch.len());
}

fn new_writer(file_name: &str) -> impl Write {
    let mut path = PathBuf::from("dump");
    create_dir_all(&path).unwrap();
    path.push(file_name);
    let file = File::create(path).unwrap();
    BufWriter::new(file)
}

fn write_png(name: &str, image: &Image) {
    if image.is_empty() {
        eprintln!("Skipping empty image \"{}\"", name);
        return;
    }

    let writer = new_writer(&format!("{}.png", name));
    let width = u32::from(image.width());
    let height = u32::from(image.height());
    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Rgba);
    let mut writer = encoder.write_header().unwrap();
    writer.write_image_data(image.pixels()).unwrap();
}

fn write_wav(name: &str, sound: &Sound) {
    let mut writer = new_writer(&format!("{}.wav", name));
    let channels = sound.channels();
    let bits = sound.bits_per_sample();
    let rate = u32::from(sound.sample_rate());
    let block_align = channels * bits / 8;
    let data_len = sound.samples().len() as u32;

    writer.write_all(b"RIFF").unwrap();
    writer.write_u32::<LittleEndian>(36 + data_len).unwrap();
    writer.write_all(b"WAVEfmt ").unwrap();
    writer.write_u32::<LittleEndian>(16).unwrap();
    writer.write_u16::<LittleEndian>(1).unwrap();
    writer.write_u16::<LittleEndian>(channels).unwrap();
    writer.write_u32::<LittleEndian>(rate).unwrap();
    writer
        .write_u32::<LittleEndian>(rate * u32::from(block_align))
        .unwrap();
    writer.write_u16::<LittleEndian>(block_align).unwrap();
    writer.write_u16::<LittleEndian>(bits).unwrap();
    writer.write_all(b"data").unwrap();
    writer.write_u32::<LittleEndian>(data_len).unwrap();
    writer.write_all(sound.samples()).unwrap();
}
