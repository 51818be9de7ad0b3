//! Coefficient block transfer: textual byte lists in, LSB-first wire order
//! out, and back again.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]

use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
use sy24145::registers::*;
use sy24145::{
    format_byte_list, parse_byte_list, AmpConfig, CoeffBlock, Error, ParseError, Sy24145,
    SY24145_I2C_ADDR_LOW,
};

const ADDR: u8 = SY24145_I2C_ADDR_LOW;

fn device(expectations: &[I2cTransaction]) -> Sy24145<I2cMock> {
    Sy24145::new(I2cMock::new(expectations), ADDR, AmpConfig::default())
        .expect("register tables are disjoint")
}

#[test]
fn parsed_text_is_transmitted_in_reversed_wire_order() {
    let text = "1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20";
    let block = CoeffBlock::bq(0).unwrap();
    let bytes = parse_byte_list(text, block.block_len()).unwrap();

    // Byte 20 goes out first: the wire wants LSB-first blocks.
    let mut frame = vec![BQ0];
    frame.extend((1..=20u8).rev());
    let expectations = [I2cTransaction::write(ADDR, frame)];
    let mut dev = device(&expectations);
    dev.write_coeff_block(block, &bytes).unwrap();
    dev.release().done();
}

#[test]
fn read_blocks_come_back_msb_first() {
    let block = CoeffBlock::speq(2).unwrap();
    // The chip answers LSB first; 1 is the least significant byte.
    let wire: Vec<u8> = (1..=12u8).collect();
    let expectations = [I2cTransaction::write_read(ADDR, vec![SPEQ0 + 2], wire)];
    let mut dev = device(&expectations);
    let bytes = dev.read_coeff_block(block).unwrap();
    let expected: Vec<u8> = (1..=12u8).rev().collect();
    assert_eq!(&bytes[..], &expected[..]);
    dev.release().done();
}

#[test]
fn block_roundtrip_preserves_the_presented_order() {
    let block = CoeffBlock::atk_rel_tc(1).unwrap();
    let data: Vec<u8> = (100..118u8).collect();
    let mut frame = vec![SPEQ_ATK_REL_TC_1];
    frame.extend(data.iter().rev());
    let expectations = [
        I2cTransaction::write(ADDR, frame),
        I2cTransaction::write_read(
            ADDR,
            vec![SPEQ_ATK_REL_TC_1],
            data.iter().rev().copied().collect(),
        ),
    ];
    let mut dev = device(&expectations);
    dev.write_coeff_block(block, &data).unwrap();
    let back = dev.read_coeff_block(block).unwrap();
    assert_eq!(&back[..], &data[..]);
    dev.release().done();
}

#[test]
fn loudness_uses_the_12_byte_block_length() {
    let block = CoeffBlock::LOUDNESS;
    assert_eq!(block.block_len(), 12);
    let data = [7u8; 12];
    let mut frame = vec![CHANNEL12_LOUDNESS];
    frame.extend_from_slice(&data);
    let expectations = [I2cTransaction::write(ADDR, frame)];
    let mut dev = device(&expectations);
    dev.write_coeff_block(block, &data).unwrap();
    dev.release().done();
}

#[test]
fn wrong_block_length_is_rejected_before_the_bus() {
    let block = CoeffBlock::drc_bq(3).unwrap();
    let mut dev = device(&[]);
    assert_eq!(
        dev.write_coeff_block(block, &[0u8; 12]),
        Err(Error::InvalidWidth(12))
    );
    dev.release().done();
}

#[test]
fn malformed_text_never_reaches_the_bus() {
    let block = CoeffBlock::bq(5).unwrap();
    let mut dev = device(&[]);

    let nineteen = "1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19";
    assert_eq!(
        parse_byte_list(nineteen, block.block_len()),
        Err(ParseError::TokenCount {
            expected: 20,
            found: 19
        })
    );
    let non_digit = "1 2 3 4 5 6 7 8 9 1O 11 12 13 14 15 16 17 18 19 20";
    assert_eq!(
        parse_byte_list(non_digit, block.block_len()),
        Err(ParseError::InvalidToken { index: 9 })
    );
    // No transactions were scripted; done() verifies none happened.
    dev.release().done();
}

#[test]
fn formatted_readback_matches_the_original_text() {
    let text = "255 0 17 3 99 100 101 1 2 3 4 5 6 7 8 9 10 11 12 13";
    let block = CoeffBlock::bq(17).unwrap();
    let bytes = parse_byte_list(text, block.block_len()).unwrap();
    let wire: Vec<u8> = bytes.iter().rev().copied().collect();
    let expectations = [I2cTransaction::write_read(ADDR, vec![BQ17], wire)];
    let mut dev = device(&expectations);
    let back = dev.read_coeff_block(block).unwrap();
    assert_eq!(format_byte_list(&back).as_str(), text);
    dev.release().done();
}
