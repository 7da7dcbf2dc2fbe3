/// Returns the Atomic Number (Z) for a given element symbol
pub fn atomic_number(element: &str) -> i32 {
    match element {
        // --- Period 1 ---
        "H"  => 1,
        "He" => 2,
        // --- Period 2 ---
        "Li" => 3, "Be" => 4, "B" => 5, "C" => 6, "N" => 7, "O" => 8, "F" => 9, "Ne" => 10,
        // --- Period 3 ---
        "Na" => 11, "Mg" => 12, "Al" => 13, "Si" => 14, "P" => 15, "S" => 16, "Cl" => 17, "Ar" => 18,
        // --- Period 4 ---
        "K" => 19, "Ca" => 20, "Sc" => 21, "Ti" => 22, "V" => 23, "Cr" => 24, "Mn" => 25,
        "Fe" => 26, "Co" => 27, "Ni" => 28, "Cu" => 29, "Zn" => 30, "Ga" => 31, "Ge" => 32,
        "As" => 33, "Se" => 34, "Br" => 35, "Kr" => 36,
        _ => 0, // Unknown/Dummy
    }
}

/// Returns the (r, g, b) display color for an element symbol.
/// Colors are standard CPK; used to tint grid buttons and chart bars.
pub fn element_color(element: &str) -> (f64, f64, f64) {
    match element {
        // --- Period 1 ---
        "H"  => (1.00, 1.00, 1.00), // White
        "He" => (0.85, 1.00, 1.00), // Cyan-White

        // --- Period 2 ---
        "Li" => (0.80, 0.50, 1.00), // Violet
        "Be" => (0.76, 1.00, 0.00), // Yellow-Green
        "B"  => (1.00, 0.70, 0.70), // Pink-Salmon
        "C"  => (0.20, 0.20, 0.20), // Dark Grey
        "N"  => (0.19, 0.31, 0.97), // Blue
        "O"  => (1.00, 0.05, 0.05), // Red
        "F"  => (0.56, 0.88, 0.31), // Green
        "Ne" => (0.70, 0.89, 0.96), // Light Cyan

        // --- Period 3 ---
        "Na" => (0.67, 0.36, 0.95), // Violet
        "Mg" => (0.54, 1.00, 0.00), // Forest Green
        "Al" => (0.75, 0.65, 0.65), // Silver-Grey
        "Si" => (0.94, 0.78, 0.63), // Tan
        "P"  => (1.00, 0.50, 0.00), // Orange
        "S"  => (1.00, 1.00, 0.19), // Yellow
        "Cl" => (0.12, 0.94, 0.12), // Bright Green
        "Ar" => (0.50, 0.82, 0.89), // Cyan

        // --- Period 4 (Selected Common Metals) ---
        "K"  => (0.56, 0.25, 0.83), // Purple
        "Ca" => (0.24, 1.00, 0.00), // Dark Green
        "Sc" => (0.90, 0.90, 0.90), // Silver-White
        "Ti" => (0.75, 0.76, 0.78), // Silver
        "V"  => (0.65, 0.65, 0.67), // Grey
        "Cr" => (0.54, 0.60, 0.78), // Blue-Grey
        "Mn" => (0.61, 0.48, 0.78), // Purple-Grey
        "Fe" => (0.88, 0.40, 0.20), // Rust / Orange
        "Co" => (0.94, 0.56, 0.63), // Pink-ish
        "Ni" => (0.31, 0.82, 0.31), // Green
        "Cu" => (0.78, 0.50, 0.20), // Copper
        "Zn" => (0.49, 0.50, 0.69), // Slate

        // --- Catch-All (Unknown) ---
        _    => (1.00, 0.08, 0.58), // Hot Pink for errors
    }
}
