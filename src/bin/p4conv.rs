use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;
use p4conv_rust::p4conv_common_rs::codec::core::integer::decode_signed;
use p4conv_rust::p4conv_common_rs::codec::core::{DecodedValue, Value, ValueKind};
use p4conv_rust::p4conv_common_rs::codec::debug::debug_logger::{format_hex, parse_hex, EncodedValueDebugLogger};
use p4conv_rust::p4conv_common_rs::utils::config_loader::ConfigLoader;
use p4conv_rust::p4conv_common_rs::utils::log_config::init_logging;

#[derive(Parser)]
#[command(name = "p4conv")]
#[command(about = "P4 field value codec - アドレス・整数のエンコード/デコード")]
#[command(version = "0.1.0")]
struct Cli {
    /// デバッグモード
    #[arg(short, long)]
    debug: bool,

    /// 設定ファイル (json / toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 値を固定長バイト列にエンコード
    Encode {
        /// エンコードする値 (MAC, IPv4, IPv6, 整数, テキスト)
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// フィールドのビット幅
        #[arg(short, long)]
        bitwidth: u32,

        /// 値の形式 (mac, ipv4, ipv6, int, raw)。省略時は自動判定
        #[arg(short, long)]
        kind: Option<ValueKind>,

        /// 値をJSONとして解釈する (例: '[1337]')
        #[arg(short, long)]
        json: bool,
    },
    /// 16進バイト列をデコード
    Decode {
        /// 16進文字列 (例: 0x0a000001)
        hex: String,

        /// 値の形式 (mac, ipv4, ipv6, int, raw)
        #[arg(short, long)]
        kind: ValueKind,

        /// 2の補数として符号付きでデコード (int のみ)
        #[arg(short, long)]
        signed: bool,

        /// 符号付きデコード時のビット幅
        #[arg(short, long)]
        bitwidth: Option<u32>,
    },
    /// 値の形式を判定
    Detect {
        /// 判定する値
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}

/// コマンドライン引数は常に文字列なので、10進整数に見えるものは整数として扱う
fn value_from_arg(arg: &str) -> Value {
    match arg.parse::<i128>() {
        Ok(n) => Value::Integer(n),
        Err(_) => Value::Text(arg.to_string()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();

    let loader = match &cli.config {
        Some(path) => ConfigLoader::with_paths(vec![path.clone()]),
        None => ConfigLoader::new(),
    };
    let config = loader.load()?;
    init_logging(&config.logging, cli.debug)?;

    let encoder = config.encoder();
    let hex_format = config.output.hex_format();

    match cli.command {
        Commands::Encode { value, bitwidth, kind, json } => {
            let (kind, encoded) = if json {
                let parsed = Value::try_from(serde_json::from_str::<serde_json::Value>(&value)?)?;
                (encoder.classify(parsed.clone())?, encoder.encode(parsed, bitwidth)?)
            } else {
                match kind {
                    Some(ValueKind::Raw) => {
                        (ValueKind::Raw, encoder.encode(Value::Raw(parse_hex(&value)?), bitwidth)?)
                    }
                    Some(kind) => (kind, encoder.encode_as(kind, &value, bitwidth)?),
                    None => {
                        let parsed = value_from_arg(&value);
                        (encoder.classify(parsed.clone())?, encoder.encode(parsed, bitwidth)?)
                    }
                }
            };
            EncodedValueDebugLogger::log_encoded(kind, bitwidth, &encoded);
            println!("{}", format_hex(&encoded, hex_format));
        }

        Commands::Decode { hex, kind, signed, bitwidth } => {
            let bytes = parse_hex(&hex)?;
            let decoded = if signed {
                if kind != ValueKind::Integer {
                    return Err("--signed is only valid with --kind int".into());
                }
                let bitwidth = bitwidth.unwrap_or((bytes.len() * 8) as u32);
                DecodedValue::Signed(decode_signed(&bytes, bitwidth)?)
            } else {
                encoder.decode(kind, &bytes)?
            };
            EncodedValueDebugLogger::log_decoded(kind, &bytes, &decoded.to_string());
            println!("{}", decoded);
        }

        Commands::Detect { value } => {
            let kind = encoder.classify(value_from_arg(&value))?;
            println!("{}", kind);
        }
    }

    Ok(())
}
