//! Fixed rows shipped with every store: the remote schema seed and the local
//! fallback initialization both read from here.

/// (id, code, English name, Lithuanian name)
pub const COUNTRIES: [(i32, &str, &str, &str); 3] = [
    (1, "LT", "Lithuania", "Lietuva"),
    (2, "GB", "United Kingdom", "Jungtinė Karalystė"),
    (4, "DE", "Germany", "Vokietija"),
];

pub const STATUSES: [(i32, &str); 3] = [(1, "pending"), (2, "accepted"), (3, "rejected")];

/// (invite_guid, full name, call name, language, fly_from, status_id).
/// Guest ids are assigned in this order starting at 1.
pub const GUESTS: [(&str, &str, &str, &str, i32, i32); 5] = [
    ("550e8400-e29b-41d4-a716-446655440001", "Jonas Petraitis", "Jonas", "LT", 1, 1),
    ("550e8400-e29b-41d4-a716-446655440002", "Sarah Johnson", "Sarah", "EN", 2, 1),
    ("550e8400-e29b-41d4-a716-446655440003", "Maria Schmidt", "Maria", "EN", 4, 2),
    ("550e8400-e29b-41d4-a716-446655440004", "Petras Kazlauskas", "Petras", "LT", 1, 1),
    ("550e8400-e29b-41d4-a716-446655440005", "Emma Wilson", "Emma", "EN", 2, 1),
];
