//! German messages.

use crate::catalog;
use crate::catalog::CatalogNode;

/// German message tree.
pub(super) fn catalog() -> CatalogNode {
    catalog! {
        "notification" => {
            "fine" => {
                "new" => {
                    "title" => "Neue Strafe",
                    "body" => "{{person}} hat dir eine Strafe von {{amount}} für „{{reason}}“ gegeben.",
                },
                "reminder" => {
                    "title" => "Offene Strafen",
                    "body" => [
                        one: "Du hast 1 offene Strafe über {{amount}}.",
                        other: "Du hast {{count}} offene Strafen über insgesamt {{amount}}.",
                    ],
                },
                "paid" => {
                    "title" => "Strafe bezahlt",
                    "body" => "{{person}} hat die Strafe von {{amount}} bezahlt.",
                },
                "deleted" => {
                    "title" => "Strafe zurückgezogen",
                    "body" => "{{person}} hat deine Strafe für „{{reason}}“ zurückgezogen.",
                },
            },
            "team" => {
                "joined" => {
                    "title" => "Neues Teammitglied",
                    "body" => "{{person}} ist {{team}} beigetreten.",
                },
                "invitation" => {
                    "title" => "Einladung zu {{team}}",
                    "body" => "{{person}} hat dich eingeladen, {{team}} beizutreten.",
                },
            },
        },
        "fine" => {
            "overview" => {
                "title" => "Strafen",
                "open_count" => [
                    zero: "Keine offenen Strafen",
                    one: "1 offene Strafe",
                    other: "{{count}} offene Strafen",
                ],
                "total" => "Gesamt: {{amount}}",
            },
            "quantity" => [
                one: "{{count}} Kiste Bier",
                other: "{{count}} Kisten Bier",
            ],
            "state" => {
                "paid" => "Bezahlt",
                "unpaid" => "Offen",
                "settled" => "Erledigt",
            },
            "reason" => {
                "late" => "Zu spät zum Training",
                "missed_match" => "Spiel verpasst",
                "equipment" => "Ausrüstung vergessen",
                "custom" => "{{reason}}",
            },
        },
        "team" => {
            "members" => [one: "{{count}} Mitglied", other: "{{count}} Mitglieder"],
            "invitation" => {
                "expired" => "Diese Einladung ist abgelaufen.",
                "already_member" => "Du bist bereits Mitglied von {{team}}.",
            },
        },
        "error" => {
            "unauthorized" => "Dazu bist du nicht berechtigt.",
            "not_found" => "{{item}} wurde nicht gefunden.",
            "internal" => "Etwas ist schiefgelaufen. Bitte versuche es später erneut.",
        },
    }
}
