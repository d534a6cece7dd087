//! The hand-authored conference programme.
//!
//! This is the quick-reference schedule shown above the spreadsheet-derived
//! tables. It is fixed at compile time and rendered verbatim; the detailed
//! programme comes from the workbook instead.

/// Column headers of the agenda table: the time column plus the three rooms.
pub const ROOM_HEADERS: &[&str] = &[
    "Time",
    "Plenary Room",
    "Oxygen Room (CCM)",
    "Propofol Room (Anesthesia)",
];

/// One cell of the schedule: a session title plus follow-on lines
/// (speakers, organizers) rendered on their own lines.
pub struct Session {
    pub lines: &'static [&'static str],
}

/// One time slot. Holds a single session spanning every room, or one
/// session per room.
pub struct Slot {
    pub time: &'static str,
    pub sessions: &'static [Session],
}

impl Slot {
    /// Room columns a session of this slot spans.
    pub fn colspan(&self) -> usize {
        if self.sessions.len() == 1 {
            ROOM_HEADERS.len() - 1
        } else {
            1
        }
    }
}

/// One conference day.
pub struct Day {
    pub label: &'static str,
    pub slots: &'static [Slot],
}

/// The full two-day programme.
pub const PROGRAM: &[Day] = &[
    Day {
        label: "Day 1 – October 09",
        slots: DAY_ONE,
    },
    Day {
        label: "Day 2 – October 10",
        slots: DAY_TWO,
    },
];

const DAY_ONE: &[Slot] = &[
    Slot {
        time: "08:30",
        sessions: &[Session {
            lines: &["Registration"],
        }],
    },
    Slot {
        time: "09:00",
        sessions: &[Session {
            lines: &[
                "Lecture on Oxygen and Oxygen Support",
                "(Prof Twagirumugabe & Prof Tobi KU)",
                "(Dr Mukwesi Christian)",
            ],
        }],
    },
    Slot {
        time: "10:30",
        sessions: &[Session {
            lines: &["Coffee Break & Exhibition"],
        }],
    },
    Slot {
        time: "11:00",
        sessions: &[Session {
            lines: &["Opening Ceremony", "(RSACC with Guests of Honor)"],
        }],
    },
    Slot {
        time: "12:30",
        sessions: &[Session {
            lines: &["Lunch Break"],
        }],
    },
    Slot {
        time: "13:30",
        sessions: &[
            Session {
                lines: &["Why Mothers are still dying?", "(Eugene)"],
            },
            Session {
                lines: &["WFICC and SCCM Session", "(Dawit)"],
            },
            Session {
                lines: &["ERAS Building Capacity", "(Aderonke)"],
            },
        ],
    },
    Slot {
        time: "15:00",
        sessions: &[
            Session {
                lines: &[
                    "Cardiology, Cardiac Anesthesia and Critical Care",
                    "(David)",
                ],
            },
            Session {
                lines: &[
                    "Critical Care Training in LRC (Case of Rwanda)",
                    "(Tobi, Mukwesi, Libere)",
                ],
            },
            Session {
                lines: &[
                    "Safe Pediatrics: Emergencies, Anesthesia & Critical Care",
                    "(Francoise)",
                ],
            },
        ],
    },
    Slot {
        time: "16:30",
        sessions: &[Session {
            lines: &["Recap, Refreshment and Networking"],
        }],
    },
];

const DAY_TWO: &[Slot] = &[
    Slot {
        time: "09:00",
        sessions: &[
            Session {
                lines: &["Global Anesthesia & Surgery", "(Rosemary)"],
            },
            Session {
                lines: &[
                    "IP-EMACC Interprofessional Emergency and Critical Care Training Curriculum",
                    "(Matthias)",
                ],
            },
            Session {
                lines: &[
                    "Local Regional Anesthesia & Pain Management",
                    "(Kaino)",
                ],
            },
        ],
    },
    Slot {
        time: "10:30",
        sessions: &[Session {
            lines: &["Coffee Break & Exhibition + Networking + Abstract Viewing"],
        }],
    },
    Slot {
        time: "11:00",
        sessions: &[Session {
            lines: &[
                "4 × 4 Strategy for Timely Access to Safe & Affordable Services: Perioperative, Anesthesia, Pain Management & Critical Care",
                "RSACC with MoH (HWD)",
            ],
        }],
    },
    Slot {
        time: "12:30",
        sessions: &[Session {
            lines: &["Lunch Break + Posters"],
        }],
    },
    Slot {
        time: "13:30",
        sessions: &[
            Session {
                lines: &["Strategic Plan for CCM in Rwanda", "(Christian)"],
            },
            Session {
                lines: &["Nursing Critical Care Workforce", "(Placide)"],
            },
            Session {
                lines: &["Toward NSOAP", "(Francoise)"],
            },
        ],
    },
    Slot {
        time: "15:00",
        sessions: &[Session {
            lines: &["Best Abstracts"],
        }],
    },
    Slot {
        time: "16:30",
        sessions: &[Session {
            lines: &["Recap, Refreshment and Networking"],
        }],
    },
    Slot {
        time: "17:00",
        sessions: &[Session {
            lines: &["Closing Ceremony: Rwanda Action Statement"],
        }],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_has_two_days() {
        assert_eq!(PROGRAM.len(), 2);
        assert_eq!(PROGRAM[0].label, "Day 1 – October 09");
        assert_eq!(PROGRAM[1].label, "Day 2 – October 10");
    }

    #[test]
    fn test_slots_span_all_rooms_or_fill_each() {
        for day in PROGRAM {
            for slot in day.slots {
                let count = slot.sessions.len();
                assert!(
                    count == 1 || count == ROOM_HEADERS.len() - 1,
                    "{} {} has {} sessions",
                    day.label,
                    slot.time,
                    count
                );
            }
        }
    }

    #[test]
    fn test_colspan_matches_session_count() {
        for day in PROGRAM {
            for slot in day.slots {
                if slot.sessions.len() == 1 {
                    assert_eq!(slot.colspan(), 3);
                } else {
                    assert_eq!(slot.colspan(), 1);
                }
            }
        }
    }

    #[test]
    fn test_days_open_and_close_as_published() {
        let day_one = &PROGRAM[0];
        assert_eq!(day_one.slots[0].time, "08:30");
        assert_eq!(day_one.slots[0].sessions[0].lines, ["Registration"]);

        let day_two = &PROGRAM[1];
        let last = day_two.slots.last().unwrap();
        assert_eq!(last.time, "17:00");
        assert_eq!(
            last.sessions[0].lines,
            ["Closing Ceremony: Rwanda Action Statement"]
        );
    }

    #[test]
    fn test_every_session_has_a_title_line() {
        for day in PROGRAM {
            for slot in day.slots {
                for session in slot.sessions {
                    assert!(!session.lines.is_empty());
                    assert!(!session.lines[0].is_empty());
                }
            }
        }
    }
}
