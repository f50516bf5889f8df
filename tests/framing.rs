//! End-to-end framing scenarios: slicing, multipart preparation, wire
//! round-trips, and typed field extraction over a known payload.

use bytes::Bytes;

use spp::{
    DEFAULT_SLICE_SIZE, Error, HEADER_SIZE, Packet, PacketType, combine, extract, prepare,
    prepare_with_size, slice,
};

/// A known 19-byte consumer payload holding five typed fields:
/// a 2-byte integer, a 4-byte string, a 1-byte flag set, an 8-byte
/// integer, and a decimal-scaled 4-byte float.
const TEST_PACKET_DATA: [u8; 19] = [
    0xF0, 0x62, // p1: 61538
    0x61, 0x73, 0x64, 0x66, // p2: "asdf"
    0x6B, // p3: flags, lsb first
    0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xF9, // p4: i64::MAX - 6
    0x63, 0x74, 0x1F, 0x41, // p5: 6517791 * 10^-4
];

/// The same payload framed as a single wire packet: process id 16,
/// crc 0, type Data, index 1 of 1.
const TEST_RAW_PACKET_DATA: [u8; 31] = [
    0x00, 0x10, // process id
    0x00, 0x00, // crc
    0x00, 0x00, // type
    0x00, 0x00, 0x01, // index
    0x00, 0x00, 0x01, // parts
    0xF0, 0x62, 0x61, 0x73, 0x64, 0x66, 0x6B, 0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xF9,
    0x63, 0x74, 0x1F, 0x41,
];

const P1_OFFSET: usize = 0;
const P2_OFFSET: usize = 2;
const P3_OFFSET: usize = 6;
const P4_OFFSET: usize = 7;
const P5_OFFSET: usize = 15;
const P1_SIZE: usize = 2;
const P2_SIZE: usize = 4;
const P3_SIZE: usize = 1;
const P4_SIZE: usize = 8;
const P5_SIZE: usize = 4;

/// 128-byte payload with byte-level variance between its two halves.
fn test_payload() -> Vec<u8> {
    let mut data = Vec::with_capacity(128);
    for i in 0..64u8 {
        data.push(63 - i);
        data.push(i.wrapping_mul(3));
    }
    data
}

#[test]
fn slices_128_bytes_into_two_full_slices() {
    let data = Bytes::from(test_payload());
    let slices = slice(&data, DEFAULT_SLICE_SIZE);

    assert_eq!(slices.len(), 2);
    assert_eq!(slices[0].data().len(), 64);
    assert_eq!(slices[1].data().len(), 64);
}

#[test]
fn slice_size_variance() {
    let data = Bytes::from(test_payload());
    let slices = slice(&data, 8);
    assert_eq!(slices.len(), 16);
}

#[test]
fn builds_multipart_message() {
    let packets = prepare(0, test_payload());

    assert_eq!(packets.len(), 2);
    for (i, packet) in packets.iter().enumerate() {
        assert_eq!(packet.index(), i as u32 + 1);
        assert_eq!(packet.parts(), packets.len() as u32);
    }
}

#[test]
fn builds_single_part_message() {
    let packets = prepare(1, TEST_PACKET_DATA.to_vec());

    assert_eq!(packets.len(), 1);
    assert_eq!(packets[0].index(), 1);
    assert_eq!(packets[0].parts(), 1);
}

#[test]
fn parses_known_raw_packet() {
    let packet = Packet::decode(TEST_RAW_PACKET_DATA.to_vec()).unwrap();

    assert_eq!(packet.process_id(), 16);
    assert_eq!(packet.crc(), 0);
    assert_eq!(packet.packet_type(), Some(PacketType::Data));
    assert_eq!(packet.index(), 1);
    assert_eq!(packet.parts(), 1);
    assert_eq!(packet.payload().len(), 19);
    assert_eq!(packet.payload().as_ref(), TEST_PACKET_DATA);
}

#[test]
fn rejects_truncated_raw_packet() {
    let result = Packet::decode(TEST_RAW_PACKET_DATA[..HEADER_SIZE - 1].to_vec());
    assert!(matches!(result, Err(Error::HeaderTooShort { .. })));
}

#[test]
fn wire_roundtrip_through_prepare_and_combine() {
    let data = test_payload();
    let packets = prepare(42, data.clone());

    // encode for the transport, decode on the receiving side
    let received = packets
        .iter()
        .map(|p| Packet::decode(p.encode()))
        .collect::<spp::Result<Vec<Packet>>>()
        .unwrap();

    let restored = combine(&received, |bytes| Ok::<_, Error>(bytes.to_vec()));
    assert_eq!(restored, Some(data));
}

#[test]
fn extracts_typed_fields_from_combined_payload() {
    let packet = Packet::decode(TEST_RAW_PACKET_DATA.to_vec()).unwrap();

    let payload = combine(&[packet], |bytes| Ok::<_, Error>(bytes.to_vec())).unwrap();

    let p1 = extract::<i32>(&payload, P1_OFFSET, P1_SIZE).unwrap();
    let p2 = extract::<String>(&payload, P2_OFFSET, P2_SIZE).unwrap();
    let p3 = extract::<[bool; 8]>(&payload, P3_OFFSET, P3_SIZE).unwrap();
    let p4 = extract::<i64>(&payload, P4_OFFSET, P4_SIZE).unwrap();
    let p5 = extract::<f32>(&payload, P5_OFFSET, P5_SIZE).unwrap();

    assert_eq!(p1, 61538);
    assert_eq!(p2, "asdf");
    assert_eq!(p3, [true, true, false, true, false, true, true, false]);
    assert_eq!(p4, 9_223_372_036_854_775_801);
    assert!((p5 - 651.77905).abs() < 1e-3);
}

#[test]
fn extraction_past_payload_end_fails() {
    let packet = Packet::decode(TEST_RAW_PACKET_DATA.to_vec()).unwrap();
    let result = extract::<i64>(packet.payload(), P5_OFFSET, P4_SIZE);
    assert!(matches!(result, Err(Error::FieldOutOfRange { .. })));
}

#[test]
fn combine_swallows_consumer_parse_errors() {
    let packets = prepare(5, test_payload());

    // a consumer schema that always rejects the buffer
    let parsed: Option<i32> = combine(&packets, |bytes| extract::<i32>(bytes, bytes.len(), 2));
    assert_eq!(parsed, None);
}

#[test]
fn prepared_packets_carry_verifiable_checksums() {
    let packets = prepare_with_size(9, test_payload(), 16);

    assert_eq!(packets.len(), 8);
    for packet in &packets {
        assert!(packet.verify_crc());
    }
}
