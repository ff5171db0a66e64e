use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result};

use docs_admin::admin::{Prompt, image_markdown};
use docs_admin::model::UploadFile;
use docs_admin::remote::AdminApi;

use crate::Commands;

pub(super) fn handle_command(api: &dyn AdminApi, command: Commands) -> Result<()> {
    match command {
        Commands::Tui => anyhow::bail!("tui is not a batch command"),

        Commands::List { json } => {
            let files = api.list_files().context("list files")?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&files).context("serialize file list")?
                );
            } else {
                for f in files {
                    println!("{}", f);
                }
            }
        }

        Commands::Cat { path } => {
            let content = api
                .read_file(&path)
                .with_context(|| format!("read {}", path))?;
            print!("{}", content);
            io::stdout().flush().context("flush stdout")?;
        }

        Commands::Put { path, from } => {
            let content = std::fs::read_to_string(&from)
                .with_context(|| format!("read {}", from.display()))?;
            api.write_file(&path, &content)
                .with_context(|| format!("write {}", path))?;
            println!("Сохранено: {}", path);
        }

        Commands::Upload { file } => {
            let file = UploadFile::from_path(&file)?;
            match api.upload(file).context("upload")? {
                Some(url) if !url.is_empty() => {
                    println!("{}", url);
                    println!("{}", image_markdown(&url));
                }
                _ => println!("Файл загружен"),
            }
        }

        Commands::Build { yes } => {
            if !yes && !confirm(Prompt::Build)? {
                println!("Отменено");
                return Ok(());
            }
            let message = api.build().context("build")?;
            println!(
                "{}",
                message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| "Готово".to_string())
            );
        }

        Commands::Health => {
            if !api.health().context("health check")? {
                anyhow::bail!("server answered but did not report ok");
            }
            println!("ok");
        }
    }
    Ok(())
}

fn confirm(prompt: Prompt) -> Result<bool> {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        anyhow::bail!("refusing to continue without --yes (stdin is not a terminal)");
    }
    eprint!("{} [y/N] ", prompt.text());
    io::stderr().flush().context("flush stderr")?;

    let mut line = String::new();
    stdin.lock().read_line(&mut line).context("read answer")?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes" | "д" | "да"))
}
