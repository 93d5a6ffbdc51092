use std::path::PathBuf;

use clap::Parser;

use gas_engineering_toolbox::{app, config, i18n, state::AppState, storage::FileStorage};

/// 가스 수송 공학 계산/단위 변환 CLI.
#[derive(Debug, Parser)]
#[command(name = "gas_engineering_toolbox_cli", version)]
struct Cli {
    /// 언어 코드 (auto/ko/en/ru)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    /// 원장 저장 디렉터리 (기본: 설정값 또는 ./data)
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

/// 프로그램의 엔트리 포인트. 설정과 상태를 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    if let Some(dir) = cli.data_dir {
        cfg.data_dir = Some(dir);
    }
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, None);

    let storage = FileStorage::open(cfg.resolved_data_dir())?;
    let (mut state, issues) = AppState::load(storage, cfg.default_category)?;
    for issue in &issues {
        eprintln!(
            "{}: {} ({})",
            tr.t(i18n::keys::WARN_PREFIX),
            issue.key,
            issue.detail
        );
    }

    app::run(&mut cfg, &tr, &mut state)?;
    Ok(())
}
