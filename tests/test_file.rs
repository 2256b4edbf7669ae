/*
 * SPDX-FileCopyrightText: 2024 Tommaso Fontana
 * SPDX-FileCopyrightText: 2024 Inria
 * SPDX-FileCopyrightText: 2024 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */
#![cfg(feature = "std")]

use datastream::prelude::*;
use std::fs::{File, OpenOptions};
use std::io::{Seek, SeekFrom, Write};

type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>;

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("datastream_{}_{}", name, std::process::id()))
}

#[test]
fn test_file_round_trip() -> Result<()> {
    let path = temp_path("round_trip");
    {
        let mut file = File::create(&path)?;
        let mut stream = <Stream<Output, BE>>::from_file(&mut file)?;
        stream
            .write(1_u16)?
            .write(-3_i64)?
            .write(2.5_f32)?
            .write(u128::MAX - 1)?;
        stream.flush()?;
        assert_eq!(stream.cursor(), 30);
        assert!(stream.is_file_backed());
        assert_eq!(stream.extent(), None);
    }
    assert_eq!(std::fs::read(&path)?[..2], [0x00, 0x01]);
    {
        let mut file = File::open(&path)?;
        let mut stream = <Stream<Input, BE>>::from_file(&mut file)?;
        assert_eq!(stream.read::<u16>()?, 1);
        assert_eq!(stream.read::<i64>()?, -3);
        assert_eq!(stream.read::<f32>()?, 2.5);
        assert_eq!(stream.read::<u128>()?, u128::MAX - 1);
        assert_eq!(stream.cursor(), 30);

        // End of file
        let error = stream.read::<u8>().unwrap_err();
        assert!(error.is_io());
        assert!(std::error::Error::source(&error).is_some());
        assert_eq!(stream.cursor(), 30);
    }
    std::fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn test_file_position() -> Result<()> {
    let path = temp_path("position");
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)?;
    file.write_all(&[0xff; 4])?;

    // The stream starts at the current position of the file
    {
        let mut stream = <Stream<Output, LE>>::from_file(&mut file)?;
        stream.write(0x0201_u16)?;
        assert_eq!(stream.cursor(), 2);
    }
    file.seek(SeekFrom::Start(2))?;
    {
        let mut stream = <Stream<InputOutput, LE>>::from_file(&mut file)?;
        assert_eq!(stream.read::<u16>()?, 0xffff);
        assert_eq!(stream.read::<u16>()?, 0x0201);
        stream.write(7_u8)?;
        assert_eq!(stream.cursor(), 5);
    }
    assert_eq!(std::fs::read(&path)?, [0xff, 0xff, 0xff, 0xff, 0x01, 0x02, 0x07]);
    std::fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn test_file_unsupported() -> Result<()> {
    let path = temp_path("unsupported");
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)?;
    file.write_all(&[0; 64])?;
    file.seek(SeekFrom::Start(0))?;

    let mut stream = <Stream<InputOutput, NE>>::from_file(&mut file)?;
    for offset in [0, 1, 63, 1000] {
        assert!(stream.set(1_u8, offset).unwrap_err().is_unsupported());
        assert!(stream.get::<u32>(offset).unwrap_err().is_unsupported());
    }
    assert!(stream.hex_dump().unwrap_err().is_unsupported());
    assert!(stream.as_slice().unwrap_err().is_unsupported());
    assert!(stream.as_mut_slice().unwrap_err().is_unsupported());
    assert!(stream.as_ptr().unwrap_err().is_unsupported());
    assert_eq!(
        stream.hex_dump().unwrap_err().to_string(),
        "hex_dump() is not supported on file-backed streams"
    );

    // Sequential access still works, and rejection does not depend on it
    stream.read::<u64>()?;
    assert!(stream.get::<u8>(0).unwrap_err().is_unsupported());
    assert_eq!(stream.cursor(), 8);

    drop(stream);
    std::fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn test_file_read_only() -> Result<()> {
    let path = temp_path("read_only");
    std::fs::write(&path, [1, 2, 3])?;
    let mut file = File::open(&path)?;
    let mut stream = <Stream<Output, LE>>::from_file(&mut file)?;
    assert!(stream.write(0_u32).unwrap_err().is_io());
    assert_eq!(stream.cursor(), 0);
    drop(stream);
    std::fs::remove_file(&path)?;
    Ok(())
}
