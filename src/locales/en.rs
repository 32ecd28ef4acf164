//! English messages.

use crate::catalog;
use crate::catalog::CatalogNode;

/// English message tree.
pub(super) fn catalog() -> CatalogNode {
    catalog! {
        "notification" => {
            "fine" => {
                "new" => {
                    "title" => "New fine",
                    "body" => "{{person}} fined you {{amount}} for \"{{reason}}\".",
                },
                "reminder" => {
                    "title" => "Unpaid fines",
                    "body" => [
                        one: "You have 1 unpaid fine totalling {{amount}}.",
                        other: "You have {{count}} unpaid fines totalling {{amount}}.",
                    ],
                },
                "paid" => {
                    "title" => "Fine paid",
                    "body" => "{{person}} paid their fine of {{amount}}.",
                },
                "deleted" => {
                    "title" => "Fine withdrawn",
                    "body" => "{{person}} withdrew your fine for \"{{reason}}\".",
                },
            },
            "team" => {
                "joined" => {
                    "title" => "New team member",
                    "body" => "{{person}} joined {{team}}.",
                },
                "invitation" => {
                    "title" => "Invitation to {{team}}",
                    "body" => "{{person}} invited you to join {{team}}.",
                },
            },
        },
        "fine" => {
            "overview" => {
                "title" => "Fines",
                "open_count" => [
                    zero: "No open fines",
                    one: "1 open fine",
                    other: "{{count}} open fines",
                ],
                "total" => "Total: {{amount}}",
            },
            "quantity" => [
                one: "{{count}} crate of beer",
                other: "{{count}} crates of beer",
            ],
            "state" => {
                "paid" => "Paid",
                "unpaid" => "Unpaid",
                "settled" => "Settled",
            },
            "reason" => {
                "late" => "Late for training",
                "missed_match" => "Missed match",
                "equipment" => "Forgot equipment",
                "custom" => "{{reason}}",
            },
        },
        "team" => {
            "members" => [one: "{{count}} member", other: "{{count}} members"],
            "invitation" => {
                "expired" => "This invitation has expired.",
                "already_member" => "You are already a member of {{team}}.",
            },
        },
        "error" => {
            "unauthorized" => "You are not allowed to do this.",
            "not_found" => "{{item}} could not be found.",
            "internal" => "Something went wrong. Please try again later.",
        },
    }
}
