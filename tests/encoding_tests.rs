extern crate ht16k33_alphanum;

use ht16k33_alphanum::{
    decode_mask_literal, encode, frame, CharMap, CharMapError, OverlongText, DEFAULT_CHAR_MAP,
    DEFAULT_LITERALS, DOT_MASK, EXTRA_GLYPHS,
};

fn mask(c: char) -> u16 {
    DEFAULT_CHAR_MAP.lookup(c)
}

#[test]
fn default_table_matches_literals() {
    assert_eq!(DEFAULT_LITERALS.len(), 94);
    for &(c, literal) in DEFAULT_LITERALS {
        let parsed = u16::from_str_radix(literal, 2).unwrap();
        assert_eq!(mask(c), parsed, "glyph {:?}", c);
        assert_eq!(decode_mask_literal(&format!("{:016b}", parsed)), Ok(parsed));
    }
}

#[test]
fn decode_rejects_malformed_literals() {
    assert_eq!(decode_mask_literal("0000000011110111"), Ok(0x00F7));
    assert_eq!(decode_mask_literal("1000000000000000"), Ok(0x8000));
    assert_eq!(decode_mask_literal(""), Err(CharMapError::InvalidLiteral));
    assert_eq!(decode_mask_literal("0101"), Err(CharMapError::InvalidLiteral));
    assert_eq!(
        decode_mask_literal("00000000000000000"),
        Err(CharMapError::InvalidLiteral)
    );
    assert_eq!(
        decode_mask_literal("000000000000000x"),
        Err(CharMapError::InvalidLiteral)
    );
    assert_eq!(
        decode_mask_literal("0000 00000000000"),
        Err(CharMapError::InvalidLiteral)
    );
}

#[test]
fn unmapped_characters_are_blank() {
    assert_eq!(mask('\u{7}'), 0x0000);
    assert_eq!(mask('\n'), 0x0000);
    assert_eq!(mask('\\'), 0x0000);
    assert_eq!(mask('\u{7f}'), 0x0000);
    assert_eq!(mask('é'), 0x0000);
    assert_eq!(mask('.'), 0x0000);
}

#[test]
fn custom_map_from_literals() {
    let map = CharMap::from_literals(&[('A', "0000000000000001"), ('A', "0000000000000011")])
        .unwrap();
    assert_eq!(map.lookup('A'), 0x0003);
    assert_eq!(map.lookup('B'), 0x0000);

    assert_eq!(
        CharMap::from_literals(&[('A', "01")]),
        Err(CharMapError::InvalidLiteral)
    );
    let accented = CharMap::from_literals(&[('é', "0000100001011000")]).unwrap();
    assert_eq!(accented.lookup('é'), 0x0858);
    assert_eq!(accented.lookup('e'), 0x0000);
}

#[test]
fn override_default_glyph() {
    let map = DEFAULT_CHAR_MAP.with('\\', 0x2100).unwrap();
    assert_eq!(map.lookup('\\'), 0x2100);
    assert_eq!(map.lookup('A'), mask('A'));
    assert_eq!(mask('\\'), 0x0000);
}

#[test]
fn glyphs_outside_printable_ascii() {
    let map = DEFAULT_CHAR_MAP
        .with('°', 0x00E3)
        .unwrap()
        .with('\t', 0x0001)
        .unwrap();
    assert_eq!(map.lookup('°'), 0x00E3);
    assert_eq!(map.lookup('\t'), 0x0001);
    assert_eq!(map.lookup('A'), mask('A'));
    assert_eq!(map.lookup('\n'), 0x0000);
    assert_eq!(mask('°'), 0x0000);

    let map = CharMap::from_masks(&[('°', 0x00E3), ('°', 0x00E7)]).unwrap();
    assert_eq!(map.lookup('°'), 0x00E7);

    assert_eq!(
        encode("21°C", &DEFAULT_CHAR_MAP.with('°', 0x00E3).unwrap()).unwrap(),
        [mask('2'), mask('1'), 0x00E3, mask('C')]
    );
}

#[test]
fn extra_glyph_store_is_bounded() {
    let extras: Vec<(char, u16)> = (0..EXTRA_GLYPHS as u32)
        .map(|i| (char::from_u32(0x100 + i).unwrap(), 0x0001))
        .collect();
    let mut map = CharMap::from_masks(&extras).unwrap();

    // replacing an existing glyph still fits
    map = map.with('\u{100}', 0x0002).unwrap();
    assert_eq!(map.lookup('\u{100}'), 0x0002);
    // printable ASCII never uses the extra store
    map = map.with('Z', 0x0003).unwrap();
    assert_eq!(map.lookup('Z'), 0x0003);

    assert_eq!(map.with('°', 0x00E3), Err(CharMapError::ExtraGlyphsFull('°')));
}

#[test]
fn encode_single_character() {
    assert_eq!(encode("A", &DEFAULT_CHAR_MAP).unwrap(), [mask('A')]);
    assert!(encode("", &DEFAULT_CHAR_MAP).unwrap().is_empty());
}

#[test]
fn encode_merges_trailing_period() {
    assert_eq!(
        encode("A.", &DEFAULT_CHAR_MAP).unwrap(),
        [mask('A') | DOT_MASK]
    );
    assert_eq!(
        encode("AB.CD", &DEFAULT_CHAR_MAP).unwrap(),
        [mask('A'), mask('B') | DOT_MASK, mask('C'), mask('D')]
    );
    assert_eq!(
        encode("1.2.3.4.", &DEFAULT_CHAR_MAP).unwrap(),
        [
            mask('1') | DOT_MASK,
            mask('2') | DOT_MASK,
            mask('3') | DOT_MASK,
            mask('4') | DOT_MASK
        ]
    );
}

#[test]
fn encode_lone_periods() {
    assert_eq!(encode(".", &DEFAULT_CHAR_MAP).unwrap(), [mask('.')]);
    assert_eq!(mask('.'), 0x0000);
    assert_eq!(encode(".A", &DEFAULT_CHAR_MAP).unwrap(), [0x0000, mask('A')]);
    assert_eq!(
        encode("A..", &DEFAULT_CHAR_MAP).unwrap(),
        [mask('A') | DOT_MASK, 0x0000]
    );
}

#[test]
fn encode_rejects_more_than_four_cells() {
    assert_eq!(
        encode("ABCDE", &DEFAULT_CHAR_MAP),
        Err(OverlongText { cells: 5 })
    );
    assert_eq!(
        encode("A.B.C.D.E", &DEFAULT_CHAR_MAP),
        Err(OverlongText { cells: 5 })
    );
    assert_eq!(
        encode("HELLO WORLD", &DEFAULT_CHAR_MAP),
        Err(OverlongText { cells: 11 })
    );
}

#[test]
fn frame_layout() {
    assert_eq!(
        frame::build(&[0x00F7, 0x528F]),
        Ok([0x00, 0xF7, 0x00, 0x8F, 0x52, 0x00, 0x00, 0x00, 0x00])
    );
    assert_eq!(
        frame::build(&[0x0102, 0x0304, 0x0506, 0x0708]),
        Ok([0x00, 0x02, 0x01, 0x04, 0x03, 0x06, 0x05, 0x08, 0x07])
    );
    assert_eq!(frame::build(&[]), Ok([0x00; 9]));
    assert_eq!(frame::build(&[0; 5]), Err(OverlongText { cells: 5 }));
}
