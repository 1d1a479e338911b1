//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use rgb::RGB8;

/// SPI-Bytes pro Pixel: 24 Datenbits * 4 SPI-Bits / 8
pub const SPI_BYTES_PER_PIXEL: usize = 12;

/// WS2812 "0"-Bit als 4 SPI-Bits (kurzer High-Puls)
const SPI_BIT_ZERO: u8 = 0b1000;
/// WS2812 "1"-Bit als 4 SPI-Bits (langer High-Puls)
const SPI_BIT_ONE: u8 = 0b1110;

/// Kodiert eine Farbe für WS2812 über SPI (3.2 MHz)
///
/// Jedes Datenbit wird zu 4 SPI-Bits, die Reihenfolge auf dem Draht ist
/// Grün → Rot → Blau, jeweils MSB zuerst.
///
/// # Beispiele
///
/// ```
/// # use rgb::RGB8;
/// # use esp_core::encode_ws2812_spi;
/// let encoded = encode_ws2812_spi(RGB8 { r: 0, g: 0, b: 0 });
/// assert_eq!(encoded, [0x88; 12]);
/// ```
pub fn encode_ws2812_spi(color: RGB8) -> [u8; SPI_BYTES_PER_PIXEL] {
    let mut out = [0u8; SPI_BYTES_PER_PIXEL];
    for (channel, value) in [color.g, color.r, color.b].into_iter().enumerate() {
        for pair in 0..4 {
            let high = (value >> (7 - 2 * pair)) & 1;
            let low = (value >> (6 - 2 * pair)) & 1;
            out[channel * 4 + pair] = (spi_bits(high) << 4) | spi_bits(low);
        }
    }
    out
}

fn spi_bits(bit: u8) -> u8 {
    if bit == 0 { SPI_BIT_ZERO } else { SPI_BIT_ONE }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_all_ones() {
        let encoded = encode_ws2812_spi(RGB8 {
            r: 255,
            g: 255,
            b: 255,
        });
        assert_eq!(encoded, [0xEE; 12]);
    }

    #[test]
    fn test_encode_green_comes_first() {
        let encoded = encode_ws2812_spi(RGB8 { r: 0, g: 0x80, b: 0 });
        assert_eq!(encoded[0], 0xE8);
        assert!(encoded[1..].iter().all(|&byte| byte == 0x88));
    }

    #[test]
    fn test_encode_red_and_blue_positions() {
        let encoded = encode_ws2812_spi(RGB8 { r: 0x01, g: 0, b: 0xC0 });
        // Rot: LSB im letzten Byte des zweiten Blocks
        assert_eq!(encoded[7], 0x8E);
        // Blau: die beiden MSBs im ersten Byte des dritten Blocks
        assert_eq!(encoded[8], 0xEE);
        assert_eq!(encoded[9], 0x88);
    }

    #[test]
    fn test_encode_on_color() {
        // 16 = 0b0001_0000 → nur das vierte Bit gesetzt
        let encoded = encode_ws2812_spi(RGB8 {
            r: 16,
            g: 16,
            b: 16,
        });
        for block in encoded.chunks(4) {
            assert_eq!(block, [0x88, 0x8E, 0x88, 0x88]);
        }
    }
}
