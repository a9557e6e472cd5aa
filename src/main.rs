/*
 * Copyright 2021 Constantin A. <emoji.builder@c1710.de>
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

#[macro_use]
extern crate log;

use std::path::{Path, PathBuf};

use clap::{App, Arg, ArgMatches};

use emoji_extractor::config::ExtractorConfig;
use emoji_extractor::error::ExtractorError;
use emoji_extractor::extract;
use emoji_extractor::registry::entry::{DEFAULT_PAYLOAD_COLUMN, EntryLayout};
use emoji_extractor::source::Source;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = app().get_matches();
    if let Err(error) = run(&matches) {
        error!("{}", error);
        std::process::exit(1);
    }
}

fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("emoji_extractor")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Constantin A. <emoji.builder@c1710.de>")
        .about("Extracts categorized emoji lists from the Unicode emoji-test.txt")
        .arg(Arg::with_name("config")
            .short("c")
            .long("config")
            .value_name("FILE")
            .help("A JSON or YAML file with the configuration; flags override its values")
            .takes_value(true))
        .arg(Arg::with_name("file")
            .short("f")
            .long("file")
            .value_name("FILE")
            .help("Read emoji-test.txt from a local file")
            .takes_value(true)
            .conflicts_with_all(&["url", "emoji_version"]))
        .arg(Arg::with_name("url")
            .short("u")
            .long("url")
            .value_name("URL")
            .help("Download emoji-test.txt from this URL")
            .takes_value(true)
            .conflicts_with("emoji_version"))
        .arg(Arg::with_name("emoji_version")
            .short("e")
            .long("emoji-version")
            .value_name("VERSION")
            .help("Download emoji-test.txt for this emoji version, e.g. 12.0")
            .takes_value(true))
        .arg(Arg::with_name("no_tones")
            .short("T")
            .long("no-tones")
            .help("Leave out all skin tone variants"))
        .arg(Arg::with_name("minimal")
            .short("m")
            .long("minimal")
            .help("Only output the icons, without names"))
        .arg(Arg::with_name("ignore")
            .short("i")
            .long("ignore")
            .value_name("PATTERN")
            .help("Leave out emojis matching this regular expression")
            .takes_value(true)
            .multiple(true)
            .number_of_values(1))
        .arg(Arg::with_name("no_default_ignore")
            .long("no-default-ignore")
            .help("Don't leave out the emojis introduced in Emoji 12.0"))
        .arg(Arg::with_name("format")
            .short("F")
            .long("format")
            .value_name("FORMAT")
            .help("The output format")
            .takes_value(true)
            .possible_values(&["json", "js", "mjs"]))
        .arg(Arg::with_name("compact")
            .long("compact")
            .help("Don't indent the output"))
        .arg(Arg::with_name("layout")
            .long("layout")
            .value_name("LAYOUT")
            .help("Where to find icon and name in data lines")
            .long_help("Where to find icon and name in data lines: \"fixed\" (at a fixed column, \
            Emoji 11.0 and 12.x) or \"delimited\" (after the '#', Emoji 13.0 and later)")
            .takes_value(true)
            .possible_values(&["fixed", "delimited"]))
        .arg(Arg::with_name("column")
            .long("column")
            .value_name("COLUMN")
            .help("The column at which the payload starts with the fixed layout")
            .takes_value(true))
        .arg(Arg::with_name("output")
            .short("o")
            .long("output")
            .value_name("FILE")
            .help("The file to write to, defaults to emoji-v<version>.<format>")
            .takes_value(true))
}

fn run(matches: &ArgMatches) -> Result<(), ExtractorError> {
    let config = configure(matches)?;
    let extraction = extract(&config)?;

    if !extraction.diagnostics.is_empty() {
        warn!("{} lines could not be decoded, check the layout (currently {:?})",
              extraction.diagnostics.len(),
              config.entry_layout());
    }
    debug!("{:?}", extraction.stats);

    let path = config.output_path();
    config.output_format().save(&path, &extraction.data, config.pretty)?;
    Ok(())
}

fn configure(matches: &ArgMatches) -> Result<ExtractorConfig, ExtractorError> {
    let mut config = match matches.value_of("config") {
        Some(path) => ExtractorConfig::from_file(Path::new(path))?,
        None => ExtractorConfig::default()
    };

    if let Some(file) = matches.value_of("file") {
        config.source = Source::File(PathBuf::from(file));
    } else if let Some(url) = matches.value_of("url") {
        config.source = Source::Url(url.to_string());
    } else if let Some(version) = matches.value_of("emoji_version") {
        let version = Source::parse_version(version)
            .ok_or_else(|| invalid_argument("emoji-version", version))?;
        config.source = Source::Version(version);
    }

    if matches.is_present("no_tones") {
        config.tones = false;
    }
    if matches.is_present("minimal") {
        config.minimal = true;
    }
    if matches.is_present("no_default_ignore") {
        config.ignore.clear();
    }
    if let Some(patterns) = matches.values_of("ignore") {
        config.ignore.extend(patterns.map(String::from));
    }
    if let Some(format) = matches.value_of("format").and_then(|format| format.parse().ok()) {
        config.format = format;
    }
    if matches.is_present("compact") {
        config.pretty = false;
    }

    let column = match matches.value_of("column") {
        Some(column) => Some(column.parse::<usize>()
            .map_err(|_| invalid_argument("column", column))?),
        None => None
    };
    match matches.value_of("layout") {
        Some("delimited") => config.layout = Some(EntryLayout::Delimited),
        Some(_) => config.layout = Some(EntryLayout::Fixed(column.unwrap_or(DEFAULT_PAYLOAD_COLUMN))),
        None => if let Some(column) = column {
            config.layout = Some(EntryLayout::Fixed(column));
        }
    }

    if let Some(output) = matches.value_of("output") {
        config.output = Some(PathBuf::from(output));
    }
    Ok(config)
}

fn invalid_argument(name: &'static str, value: &str) -> ExtractorError {
    ExtractorError::InvalidArgument {
        name,
        value: value.to_string()
    }
}
