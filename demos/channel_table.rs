// Prints the WiFi channel plan known to ifprobe.
use ifprobe::wireless::{
    channel_to_frequency, frequency_to_channel, WiFiBand, BAND_5000_CHANNELS,
};

fn main() {
    println!("2.4 GHz");
    for channel in 1..=14u8 {
        let freq = channel_to_frequency(WiFiBand::Band2_4GHz, channel);
        println!("\t{:>3} -> {} MHz", channel, freq);
    }
    println!("5 GHz");
    for (channel, freq) in BAND_5000_CHANNELS.iter() {
        let back = frequency_to_channel(*freq);
        if back == *channel {
            println!("\t{:>3} -> {} MHz", channel, freq);
        } else {
            println!("\t{:>3} -> {} MHz (maps back to {})", channel, freq, back);
        }
    }
}
