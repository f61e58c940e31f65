//! § 20 Beendigung des Mietverhältnisses / Endrückgabe.

use crate::model::{Decisions, ReturnRule};

const KEYS_AND_ADDRESS: &str =
    "(2) Er hat alle Schlüssel, von ihm selbst beschaffte, zurückzugeben.\n\
     (3) Er hat dem Vermieter bei Auszug aus der Wohnung – auch wenn dieser vor \
     Beendigung des Mietverhältnisses erfolgt – unverzüglich seine neue Anschrift \
     mitzuteilen.";

/// Return-of-property clause: the standard clean-and-contractual variant,
/// or the variant listing agreed final tasks. An unspecified rule omits the
/// clause so the template paragraph can be deleted.
pub fn return_of_property(decisions: &Decisions) -> String {
    match decisions.return_rule {
        ReturnRule::CleanAndContractual => format!(
            "(1) Bei Beendigung des Mietverhältnisses hat der Mieter den \
             Mietgegenstand in sauberem und vertragsgemäßem Zustand \
             (vgl. §§ 13 - 17) zurückzugeben.\n{KEYS_AND_ADDRESS}"
        ),
        ReturnRule::AdditionalTasks => {
            let tasks = decisions.return_tasks.join("\n");
            let list_block = if tasks.is_empty() {
                "\n".to_string()
            } else {
                format!("\n\n{tasks}\n")
            };
            format!(
                "(1) Bei Beendigung des Mietverhältnisses hat der Mieter den \
                 Mietgegenstand in sauberem und vertragsgemäßem Zustand \
                 (vgl. §§ 13 - 17) zurückzugeben und folgende Endarbeiten \
                 durchzuführen:{list_block}\n{KEYS_AND_ADDRESS}"
            )
        }
        ReturnRule::Unspecified => String::new(),
    }
}
