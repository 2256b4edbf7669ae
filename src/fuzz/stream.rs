/*
 * SPDX-FileCopyrightText: 2024 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::prelude::*;
use arbitrary::Arbitrary;

#[derive(Arbitrary, Debug)]
pub struct FuzzCase {
    init: Vec<u8>,
    commands: Vec<RandomCommand>,
}

#[derive(Arbitrary, Debug)]
pub enum RandomCommand {
    Cursor,
    Write(Value),
    Read(Kind),
    Set(Value, usize),
    Get(Kind, usize),
}

#[derive(Arbitrary, Debug, Clone, Copy)]
pub enum Value {
    U8(u8),
    I16(i16),
    U32(u32),
    I64(i64),
    U128(u128),
    F32(f32),
    F64(f64),
}

#[derive(Arbitrary, Debug, Clone, Copy)]
pub enum Kind {
    U8,
    I16,
    U32,
    I64,
    U128,
    F32,
    F64,
}

impl Value {
    fn to_be_bytes(self) -> Vec<u8> {
        match self {
            Value::U8(v) => v.to_be_bytes().to_vec(),
            Value::I16(v) => v.to_be_bytes().to_vec(),
            Value::U32(v) => v.to_be_bytes().to_vec(),
            Value::I64(v) => v.to_be_bytes().to_vec(),
            Value::U128(v) => v.to_be_bytes().to_vec(),
            Value::F32(v) => v.to_be_bytes().to_vec(),
            Value::F64(v) => v.to_be_bytes().to_vec(),
        }
    }

    fn write_to(self, stream: &mut Stream<'_, InputOutput, BE>) -> Result<(), StreamError> {
        match self {
            Value::U8(v) => stream.write(v),
            Value::I16(v) => stream.write(v),
            Value::U32(v) => stream.write(v),
            Value::I64(v) => stream.write(v),
            Value::U128(v) => stream.write(v),
            Value::F32(v) => stream.write(v),
            Value::F64(v) => stream.write(v),
        }
        .map(|_| ())
    }

    fn set_to(self, stream: &mut Stream<'_, InputOutput, BE>, offset: usize) -> Result<(), StreamError> {
        match self {
            Value::U8(v) => stream.set(v, offset),
            Value::I16(v) => stream.set(v, offset),
            Value::U32(v) => stream.set(v, offset),
            Value::I64(v) => stream.set(v, offset),
            Value::U128(v) => stream.set(v, offset),
            Value::F32(v) => stream.set(v, offset),
            Value::F64(v) => stream.set(v, offset),
        }
    }
}

impl Kind {
    fn bytes(self) -> usize {
        match self {
            Kind::U8 => 1,
            Kind::I16 => 2,
            Kind::U32 | Kind::F32 => 4,
            Kind::I64 | Kind::F64 => 8,
            Kind::U128 => 16,
        }
    }

    fn read_from(self, stream: &mut Stream<'_, InputOutput, BE>) -> Result<Value, StreamError> {
        Ok(match self {
            Kind::U8 => Value::U8(stream.read()?),
            Kind::I16 => Value::I16(stream.read()?),
            Kind::U32 => Value::U32(stream.read()?),
            Kind::I64 => Value::I64(stream.read()?),
            Kind::U128 => Value::U128(stream.read()?),
            Kind::F32 => Value::F32(stream.read()?),
            Kind::F64 => Value::F64(stream.read()?),
        })
    }

    fn get_from(self, stream: &Stream<'_, InputOutput, BE>, offset: usize) -> Result<Value, StreamError> {
        Ok(match self {
            Kind::U8 => Value::U8(stream.get(offset)?),
            Kind::I16 => Value::I16(stream.get(offset)?),
            Kind::U32 => Value::U32(stream.get(offset)?),
            Kind::I64 => Value::I64(stream.get(offset)?),
            Kind::U128 => Value::U128(stream.get(offset)?),
            Kind::F32 => Value::F32(stream.get(offset)?),
            Kind::F64 => Value::F64(stream.get(offset)?),
        })
    }
}

/// Return the range of `len` bytes at `offset` if it fits in `model`.
fn fits(model: &[u8], offset: usize, len: usize) -> Option<core::ops::Range<usize>> {
    offset
        .checked_add(len)
        .filter(|&end| end <= model.len())
        .map(|end| offset..end)
}

/// Check a big-endian [`Stream`] against a byte vector on which the same
/// operations are simulated. Floats are compared by bit pattern.
pub fn harness(data: FuzzCase) {
    let mut model = data.init.clone();
    let mut buffer = data.init.clone();
    let mut cursor = 0;

    let mut stream = <Stream<InputOutput, BE>>::new(&mut buffer);
    for command in data.commands {
        match command {
            RandomCommand::Cursor => {
                assert_eq!(stream.cursor(), cursor);
            }
            RandomCommand::Write(value) => {
                let bytes = value.to_be_bytes();
                let result = value.write_to(&mut stream);
                match fits(&model, cursor, bytes.len()) {
                    Some(range) => {
                        assert!(result.is_ok());
                        model[range].copy_from_slice(&bytes);
                        cursor += bytes.len();
                    }
                    None => assert!(result.unwrap_err().is_out_of_bounds()),
                }
            }
            RandomCommand::Read(kind) => {
                let result = kind.read_from(&mut stream);
                match fits(&model, cursor, kind.bytes()) {
                    Some(range) => {
                        assert_eq!(result.unwrap().to_be_bytes(), &model[range]);
                        cursor += kind.bytes();
                    }
                    None => assert!(result.unwrap_err().is_out_of_bounds()),
                }
            }
            RandomCommand::Set(value, offset) => {
                let bytes = value.to_be_bytes();
                let result = value.set_to(&mut stream, offset);
                match fits(&model, offset, bytes.len()) {
                    Some(range) => {
                        assert!(result.is_ok());
                        model[range].copy_from_slice(&bytes);
                    }
                    None => assert!(result.unwrap_err().is_out_of_bounds()),
                }
            }
            RandomCommand::Get(kind, offset) => {
                let result = kind.get_from(&stream, offset);
                match fits(&model, offset, kind.bytes()) {
                    Some(range) => assert_eq!(result.unwrap().to_be_bytes(), &model[range]),
                    None => assert!(result.unwrap_err().is_out_of_bounds()),
                }
            }
        };
        assert_eq!(stream.as_slice().unwrap(), &model[..]);
        assert_eq!(stream.cursor(), cursor);
    }
}
