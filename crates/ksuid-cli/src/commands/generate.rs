use std::io::Write;

use ksuid::{Base36, Base62, CodecExt, Id, Token};
use tracing::instrument;

use super::rfc3339;
use crate::{
    config::{Encoding, GenerateConfig, IdKind},
    prefix::PrefixedKsuid,
};

/// Prints `config.count` ids, one per line.
///
/// Verbose KSUID lines read `<id> -> <rfc3339> (timestamp: <unix secs>)`.
/// Tokens have no timestamp, so verbose adds nothing to them.
#[instrument(level = "debug", skip(out))]
pub fn generate<W: Write>(config: &GenerateConfig, out: &mut W) -> anyhow::Result<()> {
    for _ in 0..config.count {
        match config.kind {
            IdKind::Ksuid => {
                let (line, id) = match (&config.prefix, config.encoding) {
                    (Some(prefix), Encoding::Base62) => {
                        let prefixed = PrefixedKsuid::new(prefix)?;
                        (prefixed.to_string(), prefixed.ksuid())
                    }
                    (prefix, encoding) => {
                        let id = ksuid::try_generate()?;
                        (with_prefix(prefix.as_deref(), &encode(&id, encoding)), id)
                    }
                };
                if config.verbose {
                    writeln!(out, "{line} -> {} (timestamp: {})", rfc3339(&id), id.timestamp())?;
                } else {
                    writeln!(out, "{line}")?;
                }
            }
            IdKind::Token => {
                let token = Token::new();
                let encoded = encode(&token, config.encoding);
                writeln!(out, "{}", with_prefix(config.prefix.as_deref(), &encoded))?;
            }
        }
    }
    Ok(())
}

fn encode<ID: Id>(id: &ID, encoding: Encoding) -> String {
    match encoding {
        Encoding::Base62 => id.encode::<Base62>(),
        Encoding::Base36 => id.encode::<Base36>(),
    }
}

fn with_prefix(prefix: Option<&str>, encoded: &str) -> String {
    match prefix {
        Some(prefix) => format!("{prefix}_{encoded}"),
        None => encoded.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::ParsedId;

    fn run(config: GenerateConfig) -> Vec<String> {
        let mut out = Vec::new();
        generate(&config, &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    fn config(count: usize) -> GenerateConfig {
        GenerateConfig {
            count,
            verbose: false,
            prefix: None,
            encoding: Encoding::Base62,
            kind: IdKind::Ksuid,
        }
    }

    #[test]
    fn prints_one_line_per_id() {
        let lines = run(config(5));
        assert_eq!(lines.len(), 5);
        for line in &lines {
            assert_eq!(line.len(), 27);
            assert!(ksuid::Ksuid::from_string(line).is_ok());
        }
    }

    #[test]
    fn prefixes_and_lowercase() {
        let lines = run(GenerateConfig {
            prefix: Some("user".into()),
            ..config(2)
        });
        for line in &lines {
            let parsed = ParsedId::parse(line).unwrap();
            assert_eq!(parsed.prefix.as_deref(), Some("user"));
        }

        let lines = run(GenerateConfig {
            prefix: Some("ord".into()),
            encoding: Encoding::Base36,
            ..config(1)
        });
        assert_eq!(lines[0].len(), "ord_".len() + 31);
        assert!(ParsedId::parse(&lines[0]).is_ok());
    }

    #[test]
    fn verbose_shows_time() {
        let lines = run(GenerateConfig {
            verbose: true,
            ..config(1)
        });
        let (id, rest) = lines[0].split_once(" -> ").unwrap();
        let id = ksuid::Ksuid::from_string(id).unwrap();
        assert_eq!(
            rest,
            format!("{} (timestamp: {})", rfc3339(&id), id.timestamp())
        );
    }

    #[test]
    fn tokens_ignore_verbose() {
        let lines = run(GenerateConfig {
            verbose: true,
            prefix: Some("sk".into()),
            kind: IdKind::Token,
            ..config(3)
        });
        assert_eq!(lines.len(), 3);
        for line in &lines {
            let token = line.strip_prefix("sk_").unwrap();
            assert!(Token::from_string(token).is_ok());
            assert!(!line.contains("->"));
        }
    }
}
