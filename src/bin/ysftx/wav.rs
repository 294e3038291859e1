//! Mono 16-bit PCM WAV writer

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use byteorder::{LittleEndian, WriteBytesExt};

const FORMAT_PCM: u16 = 1;
const BITS_PER_SAMPLE: u16 = 16;
const NUM_CHANNELS: u16 = 1;

pub fn write_wav(rate: u32, samples: &[i16], path: &Path) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_wav_to(&mut out, rate, samples)?;
    out.flush()
}

fn write_wav_to<W: Write>(out: &mut W, rate: u32, samples: &[i16]) -> io::Result<()> {
    let bytes_per_sample = (BITS_PER_SAMPLE / 8) as u32;
    let data_len = samples.len() as u32 * bytes_per_sample;

    out.write_all(b"RIFF")?;
    out.write_u32::<LittleEndian>(36 + data_len)?;
    out.write_all(b"WAVE")?;

    out.write_all(b"fmt ")?;
    out.write_u32::<LittleEndian>(16)?; // PCM header size
    out.write_u16::<LittleEndian>(FORMAT_PCM)?;
    out.write_u16::<LittleEndian>(NUM_CHANNELS)?;
    out.write_u32::<LittleEndian>(rate)?;
    out.write_u32::<LittleEndian>(rate * NUM_CHANNELS as u32 * bytes_per_sample)?;
    out.write_u16::<LittleEndian>(NUM_CHANNELS * BITS_PER_SAMPLE / 8)?;
    out.write_u16::<LittleEndian>(BITS_PER_SAMPLE)?;

    out.write_all(b"data")?;
    out.write_u32::<LittleEndian>(data_len)?;
    for &sample in samples {
        out.write_i16::<LittleEndian>(sample)?;
    }

    Ok(())
}
