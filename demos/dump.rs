// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  dump.rs - Blacklist import demo for rule-check violation files.
 *  Copyright (C) 2026  Forest Crossman <cyrozap@gmail.com>
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rcblacklist::model::*;
use rcblacklist::violation::*;
use rcblacklist::{BlacklistImporter, parser};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The blacklist file to read.
    file: String,

    /// Object id that exists in the model. May be repeated.
    #[arg(short, long = "object")]
    objects: Vec<ObjectId>,

    /// Tag name of the record elements.
    #[arg(long, default_value = parser::RECORD_TAG)]
    record_tag: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut model = LogicModel::new();
    for id in &args.objects {
        model.insert(*id, "", ObjectKind::Gate);
    }

    let mut blacklist = Blacklist::new();
    let importer = BlacklistImporter::new(&model).record_tag(args.record_tag);
    if let Err(error) = importer.import_into(&args.file, &mut blacklist) {
        eprintln!("Error importing file {:?}: {}", &args.file, error);
        return;
    }

    if let Err(error) = write_csv(&blacklist) {
        eprintln!("Error writing output: {:?}", error);
    }
}

fn write_csv(blacklist: &Blacklist<ObjectRef>) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = csv::Writer::from_writer(std::io::stdout());
    writer.write_record(["object-id", "rc-violation-class", "severity"])?;
    for rcv in blacklist {
        let id = rcv.object().id().to_string();
        writer.write_record([id.as_str(), rcv.violation_class(), rcv.severity().as_str()])?;
    }
    writer.flush()?;
    Ok(())
}
