//! Display audio file metadata.

use clap::Args;
use orbit_io::{AudioFormat, probe, read_wav_info};

/// Display audio file information.
#[derive(Args)]
pub struct InfoArgs {
    /// Path to the audio file
    pub file: std::path::PathBuf,
}

/// Run the info command.
pub fn run(args: InfoArgs) -> anyhow::Result<()> {
    let info = probe(&args.file)?;

    println!("File:        {}", args.file.display());
    if info.format == AudioFormat::Wav {
        let wav = read_wav_info(&args.file)?;
        let kind = if wav.is_float { "IEEE Float" } else { "PCM" };
        println!("Format:      WAV {} {}-bit", kind, wav.bits_per_sample);
    } else {
        println!("Format:      {}", info.format.extension().to_uppercase());
    }
    println!("Channels:    {}", or_unknown(info.channels));
    println!(
        "Sample Rate: {}",
        info.sample_rate
            .map_or_else(|| "unknown".to_string(), |sr| format!("{sr} Hz"))
    );
    match (info.duration_secs(), info.num_frames) {
        (Some(secs), Some(frames)) => println!("Duration:    {secs:.3}s ({frames} frames)"),
        _ => println!("Duration:    unknown"),
    }

    let file_size = std::fs::metadata(&args.file)?.len();
    println!("File Size:   {}", format_bytes(file_size));

    if info.duration_secs().is_some_and(|d| d > orbit_io::MAX_DURATION_SECS) {
        println!(
            "Note:        longer than {:.0}s, conversion will be refused",
            orbit_io::MAX_DURATION_SECS
        );
    }

    Ok(())
}

fn or_unknown<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "unknown".to_string(), |v| v.to_string())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_formatting() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.0 MB");
    }
}
