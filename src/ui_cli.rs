use std::io::{self, Write};

use crate::app::AppError;
use crate::config::NamedSource;
use crate::energy_source::EnergySource;

/// 발전원 입력값을 한 줄씩 물어 `NamedSource`를 만든다.
pub fn prompt_named_source() -> Result<NamedSource, AppError> {
    println!("\n-- 발전원 입력 --");
    let name = read_line("이름 (기본값 custom): ")?;
    let name = match name.trim() {
        "" => "custom".to_string(),
        other => other.to_string(),
    };
    let source = EnergySource::new(
        read_f64("건설비 [통화/GW]: ")?,
        read_f64("이용률 (0~1): ")?,
        read_f64("고정 운전유지비 [통화/GW/년]: ")?,
        read_f64("변동 운전유지비 [통화/TWh]: ")?,
        read_u32("건설 기간 [년]: ")?,
        read_u32("운전 기간 [년]: ")?,
    );
    Ok(NamedSource { name, source })
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf).map_err(AppError::Io)? == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "입력이 종료되었습니다.",
        )));
    }
    Ok(buf)
}

fn read_f64(prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}

fn read_u32(prompt: &str) -> Result<u32, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<u32>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("0 이상의 정수를 입력하세요."),
        }
    }
}
