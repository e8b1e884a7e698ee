use std::time::{SystemTime, UNIX_EPOCH};

use miette::{IntoDiagnostic, WrapErr};

use svg2desmos::upload::{Client, Session};

const USAGE: &str = "usage: svg2desmos <image.svg> [--upload] [--thumbnail <png>] [--title <title>]";

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut input = None;
    let mut upload = false;
    let mut thumbnail = None;
    let mut title = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--upload" => upload = true,
            "--thumbnail" => {
                thumbnail = Some(
                    args.next()
                        .ok_or_else(|| miette::miette!("--thumbnail needs a file path"))?,
                );
            }
            "--title" => {
                title = Some(
                    args.next()
                        .ok_or_else(|| miette::miette!("--title needs a value"))?,
                );
            }
            "--help" | "-h" => {
                println!("{USAGE}");
                return Ok(());
            }
            _ if input.is_none() => input = Some(arg),
            other => return Err(miette::miette!("unexpected argument: {other}\n{USAGE}")),
        }
    }
    let input = input.ok_or_else(|| miette::miette!("{USAGE}"))?;

    let source = std::fs::read_to_string(&input)
        .into_diagnostic()
        .wrap_err_with(|| format!("could not read {input}"))?;
    let graph = svg2desmos::convert(&source)?;
    let json = graph.to_json().into_diagnostic()?;
    println!("{json}");

    if upload {
        let token = std::env::var("DESMOS_SESSION")
            .map_err(|_| miette::miette!("set DESMOS_SESSION to your session cookie to upload"))?;
        let thumbnail_png = match thumbnail {
            Some(path) => std::fs::read(&path)
                .into_diagnostic()
                .wrap_err_with(|| format!("could not read {path}"))?,
            None => Vec::new(),
        };
        let title = title.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
                .to_string()
        });

        let client = Client::new(Session::new(token));
        let response = client.save(&graph, &thumbnail_png, &title)?;
        println!("{response}");
    }

    Ok(())
}
