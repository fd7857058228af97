//! Defines scan functions with custom conventions and applies them to a pending-flag
//! word and a set of addresses.

use bitscan::BitScan;

// 1-based: 0 means no flag pending, n means flag n - 1
bitscan::gen_fls!(fn highest_pending(u16) -> u16, start_from = 1);

// power-of-two alignment of an address, full width for address 0
bitscan::gen_ctz!(fn alignment_bits(u64) -> u32, on_zero = width);

fn main() {
    let pending: u16 = 0b0010_0100_0001_0000;
    match highest_pending(pending) {
        0 => println!("no flag pending"),
        digit => println!("highest pending flag: {}", digit - 1),
    }

    for addr in [0x1000u64, 0x1008, 0x2000, 0x0] {
        println!("{:#07x} is aligned to 2^{}", addr, alignment_bits(addr));
    }

    // the trait methods cover the common conventions directly
    let word = 0xf0u8;
    println!(
        "{:#010b}: fls={} ffs={} clz={} ctz={}",
        word,
        word.fls(),
        word.ffs(),
        word.clz(),
        word.ctz()
    );
}
