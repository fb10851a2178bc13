//! The built-in periodic table, hydrogen through oganesson.
//!
//! Shell configurations are the ground-state electrons per shell (K, L, M, ...).

/// One row of the built-in table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BuiltinElement {
    pub atomic_number: u32,
    pub symbol: &'static str,
    pub name: &'static str,
    pub shells: &'static [u32],
}

/// Elements 1–118, ordered by atomic number.
#[rustfmt::skip]
pub(crate) static ELEMENTS: [BuiltinElement; 118] = [
    BuiltinElement { atomic_number: 1, symbol: "H", name: "Hydrogen", shells: &[1] },
    BuiltinElement { atomic_number: 2, symbol: "He", name: "Helium", shells: &[2] },
    BuiltinElement { atomic_number: 3, symbol: "Li", name: "Lithium", shells: &[2, 1] },
    BuiltinElement { atomic_number: 4, symbol: "Be", name: "Beryllium", shells: &[2, 2] },
    BuiltinElement { atomic_number: 5, symbol: "B", name: "Boron", shells: &[2, 3] },
    BuiltinElement { atomic_number: 6, symbol: "C", name: "Carbon", shells: &[2, 4] },
    BuiltinElement { atomic_number: 7, symbol: "N", name: "Nitrogen", shells: &[2, 5] },
    BuiltinElement { atomic_number: 8, symbol: "O", name: "Oxygen", shells: &[2, 6] },
    BuiltinElement { atomic_number: 9, symbol: "F", name: "Fluorine", shells: &[2, 7] },
    BuiltinElement { atomic_number: 10, symbol: "Ne", name: "Neon", shells: &[2, 8] },
    BuiltinElement { atomic_number: 11, symbol: "Na", name: "Sodium", shells: &[2, 8, 1] },
    BuiltinElement { atomic_number: 12, symbol: "Mg", name: "Magnesium", shells: &[2, 8, 2] },
    BuiltinElement { atomic_number: 13, symbol: "Al", name: "Aluminium", shells: &[2, 8, 3] },
    BuiltinElement { atomic_number: 14, symbol: "Si", name: "Silicon", shells: &[2, 8, 4] },
    BuiltinElement { atomic_number: 15, symbol: "P", name: "Phosphorus", shells: &[2, 8, 5] },
    BuiltinElement { atomic_number: 16, symbol: "S", name: "Sulfur", shells: &[2, 8, 6] },
    BuiltinElement { atomic_number: 17, symbol: "Cl", name: "Chlorine", shells: &[2, 8, 7] },
    BuiltinElement { atomic_number: 18, symbol: "Ar", name: "Argon", shells: &[2, 8, 8] },
    BuiltinElement { atomic_number: 19, symbol: "K", name: "Potassium", shells: &[2, 8, 8, 1] },
    BuiltinElement { atomic_number: 20, symbol: "Ca", name: "Calcium", shells: &[2, 8, 8, 2] },
    BuiltinElement { atomic_number: 21, symbol: "Sc", name: "Scandium", shells: &[2, 8, 9, 2] },
    BuiltinElement { atomic_number: 22, symbol: "Ti", name: "Titanium", shells: &[2, 8, 10, 2] },
    BuiltinElement { atomic_number: 23, symbol: "V", name: "Vanadium", shells: &[2, 8, 11, 2] },
    BuiltinElement { atomic_number: 24, symbol: "Cr", name: "Chromium", shells: &[2, 8, 13, 1] },
    BuiltinElement { atomic_number: 25, symbol: "Mn", name: "Manganese", shells: &[2, 8, 13, 2] },
    BuiltinElement { atomic_number: 26, symbol: "Fe", name: "Iron", shells: &[2, 8, 14, 2] },
    BuiltinElement { atomic_number: 27, symbol: "Co", name: "Cobalt", shells: &[2, 8, 15, 2] },
    BuiltinElement { atomic_number: 28, symbol: "Ni", name: "Nickel", shells: &[2, 8, 16, 2] },
    BuiltinElement { atomic_number: 29, symbol: "Cu", name: "Copper", shells: &[2, 8, 18, 1] },
    BuiltinElement { atomic_number: 30, symbol: "Zn", name: "Zinc", shells: &[2, 8, 18, 2] },
    BuiltinElement { atomic_number: 31, symbol: "Ga", name: "Gallium", shells: &[2, 8, 18, 3] },
    BuiltinElement { atomic_number: 32, symbol: "Ge", name: "Germanium", shells: &[2, 8, 18, 4] },
    BuiltinElement { atomic_number: 33, symbol: "As", name: "Arsenic", shells: &[2, 8, 18, 5] },
    BuiltinElement { atomic_number: 34, symbol: "Se", name: "Selenium", shells: &[2, 8, 18, 6] },
    BuiltinElement { atomic_number: 35, symbol: "Br", name: "Bromine", shells: &[2, 8, 18, 7] },
    BuiltinElement { atomic_number: 36, symbol: "Kr", name: "Krypton", shells: &[2, 8, 18, 8] },
    BuiltinElement { atomic_number: 37, symbol: "Rb", name: "Rubidium", shells: &[2, 8, 18, 8, 1] },
    BuiltinElement { atomic_number: 38, symbol: "Sr", name: "Strontium", shells: &[2, 8, 18, 8, 2] },
    BuiltinElement { atomic_number: 39, symbol: "Y", name: "Yttrium", shells: &[2, 8, 18, 9, 2] },
    BuiltinElement { atomic_number: 40, symbol: "Zr", name: "Zirconium", shells: &[2, 8, 18, 10, 2] },
    BuiltinElement { atomic_number: 41, symbol: "Nb", name: "Niobium", shells: &[2, 8, 18, 12, 1] },
    BuiltinElement { atomic_number: 42, symbol: "Mo", name: "Molybdenum", shells: &[2, 8, 18, 13, 1] },
    BuiltinElement { atomic_number: 43, symbol: "Tc", name: "Technetium", shells: &[2, 8, 18, 13, 2] },
    BuiltinElement { atomic_number: 44, symbol: "Ru", name: "Ruthenium", shells: &[2, 8, 18, 15, 1] },
    BuiltinElement { atomic_number: 45, symbol: "Rh", name: "Rhodium", shells: &[2, 8, 18, 16, 1] },
    BuiltinElement { atomic_number: 46, symbol: "Pd", name: "Palladium", shells: &[2, 8, 18, 18] },
    BuiltinElement { atomic_number: 47, symbol: "Ag", name: "Silver", shells: &[2, 8, 18, 18, 1] },
    BuiltinElement { atomic_number: 48, symbol: "Cd", name: "Cadmium", shells: &[2, 8, 18, 18, 2] },
    BuiltinElement { atomic_number: 49, symbol: "In", name: "Indium", shells: &[2, 8, 18, 18, 3] },
    BuiltinElement { atomic_number: 50, symbol: "Sn", name: "Tin", shells: &[2, 8, 18, 18, 4] },
    BuiltinElement { atomic_number: 51, symbol: "Sb", name: "Antimony", shells: &[2, 8, 18, 18, 5] },
    BuiltinElement { atomic_number: 52, symbol: "Te", name: "Tellurium", shells: &[2, 8, 18, 18, 6] },
    BuiltinElement { atomic_number: 53, symbol: "I", name: "Iodine", shells: &[2, 8, 18, 18, 7] },
    BuiltinElement { atomic_number: 54, symbol: "Xe", name: "Xenon", shells: &[2, 8, 18, 18, 8] },
    BuiltinElement { atomic_number: 55, symbol: "Cs", name: "Caesium", shells: &[2, 8, 18, 18, 8, 1] },
    BuiltinElement { atomic_number: 56, symbol: "Ba", name: "Barium", shells: &[2, 8, 18, 18, 8, 2] },
    BuiltinElement { atomic_number: 57, symbol: "La", name: "Lanthanum", shells: &[2, 8, 18, 18, 9, 2] },
    BuiltinElement { atomic_number: 58, symbol: "Ce", name: "Cerium", shells: &[2, 8, 18, 19, 9, 2] },
    BuiltinElement { atomic_number: 59, symbol: "Pr", name: "Praseodymium", shells: &[2, 8, 18, 21, 8, 2] },
    BuiltinElement { atomic_number: 60, symbol: "Nd", name: "Neodymium", shells: &[2, 8, 18, 22, 8, 2] },
    BuiltinElement { atomic_number: 61, symbol: "Pm", name: "Promethium", shells: &[2, 8, 18, 23, 8, 2] },
    BuiltinElement { atomic_number: 62, symbol: "Sm", name: "Samarium", shells: &[2, 8, 18, 24, 8, 2] },
    BuiltinElement { atomic_number: 63, symbol: "Eu", name: "Europium", shells: &[2, 8, 18, 25, 8, 2] },
    BuiltinElement { atomic_number: 64, symbol: "Gd", name: "Gadolinium", shells: &[2, 8, 18, 25, 9, 2] },
    BuiltinElement { atomic_number: 65, symbol: "Tb", name: "Terbium", shells: &[2, 8, 18, 27, 8, 2] },
    BuiltinElement { atomic_number: 66, symbol: "Dy", name: "Dysprosium", shells: &[2, 8, 18, 28, 8, 2] },
    BuiltinElement { atomic_number: 67, symbol: "Ho", name: "Holmium", shells: &[2, 8, 18, 29, 8, 2] },
    BuiltinElement { atomic_number: 68, symbol: "Er", name: "Erbium", shells: &[2, 8, 18, 30, 8, 2] },
    BuiltinElement { atomic_number: 69, symbol: "Tm", name: "Thulium", shells: &[2, 8, 18, 31, 8, 2] },
    BuiltinElement { atomic_number: 70, symbol: "Yb", name: "Ytterbium", shells: &[2, 8, 18, 32, 8, 2] },
    BuiltinElement { atomic_number: 71, symbol: "Lu", name: "Lutetium", shells: &[2, 8, 18, 32, 9, 2] },
    BuiltinElement { atomic_number: 72, symbol: "Hf", name: "Hafnium", shells: &[2, 8, 18, 32, 10, 2] },
    BuiltinElement { atomic_number: 73, symbol: "Ta", name: "Tantalum", shells: &[2, 8, 18, 32, 11, 2] },
    BuiltinElement { atomic_number: 74, symbol: "W", name: "Tungsten", shells: &[2, 8, 18, 32, 12, 2] },
    BuiltinElement { atomic_number: 75, symbol: "Re", name: "Rhenium", shells: &[2, 8, 18, 32, 13, 2] },
    BuiltinElement { atomic_number: 76, symbol: "Os", name: "Osmium", shells: &[2, 8, 18, 32, 14, 2] },
    BuiltinElement { atomic_number: 77, symbol: "Ir", name: "Iridium", shells: &[2, 8, 18, 32, 15, 2] },
    BuiltinElement { atomic_number: 78, symbol: "Pt", name: "Platinum", shells: &[2, 8, 18, 32, 17, 1] },
    BuiltinElement { atomic_number: 79, symbol: "Au", name: "Gold", shells: &[2, 8, 18, 32, 18, 1] },
    BuiltinElement { atomic_number: 80, symbol: "Hg", name: "Mercury", shells: &[2, 8, 18, 32, 18, 2] },
    BuiltinElement { atomic_number: 81, symbol: "Tl", name: "Thallium", shells: &[2, 8, 18, 32, 18, 3] },
    BuiltinElement { atomic_number: 82, symbol: "Pb", name: "Lead", shells: &[2, 8, 18, 32, 18, 4] },
    BuiltinElement { atomic_number: 83, symbol: "Bi", name: "Bismuth", shells: &[2, 8, 18, 32, 18, 5] },
    BuiltinElement { atomic_number: 84, symbol: "Po", name: "Polonium", shells: &[2, 8, 18, 32, 18, 6] },
    BuiltinElement { atomic_number: 85, symbol: "At", name: "Astatine", shells: &[2, 8, 18, 32, 18, 7] },
    BuiltinElement { atomic_number: 86, symbol: "Rn", name: "Radon", shells: &[2, 8, 18, 32, 18, 8] },
    BuiltinElement { atomic_number: 87, symbol: "Fr", name: "Francium", shells: &[2, 8, 18, 32, 18, 8, 1] },
    BuiltinElement { atomic_number: 88, symbol: "Ra", name: "Radium", shells: &[2, 8, 18, 32, 18, 8, 2] },
    BuiltinElement { atomic_number: 89, symbol: "Ac", name: "Actinium", shells: &[2, 8, 18, 32, 18, 9, 2] },
    BuiltinElement { atomic_number: 90, symbol: "Th", name: "Thorium", shells: &[2, 8, 18, 32, 18, 10, 2] },
    BuiltinElement { atomic_number: 91, symbol: "Pa", name: "Protactinium", shells: &[2, 8, 18, 32, 20, 9, 2] },
    BuiltinElement { atomic_number: 92, symbol: "U", name: "Uranium", shells: &[2, 8, 18, 32, 21, 9, 2] },
    BuiltinElement { atomic_number: 93, symbol: "Np", name: "Neptunium", shells: &[2, 8, 18, 32, 22, 9, 2] },
    BuiltinElement { atomic_number: 94, symbol: "Pu", name: "Plutonium", shells: &[2, 8, 18, 32, 24, 8, 2] },
    BuiltinElement { atomic_number: 95, symbol: "Am", name: "Americium", shells: &[2, 8, 18, 32, 25, 8, 2] },
    BuiltinElement { atomic_number: 96, symbol: "Cm", name: "Curium", shells: &[2, 8, 18, 32, 25, 9, 2] },
    BuiltinElement { atomic_number: 97, symbol: "Bk", name: "Berkelium", shells: &[2, 8, 18, 32, 27, 8, 2] },
    BuiltinElement { atomic_number: 98, symbol: "Cf", name: "Californium", shells: &[2, 8, 18, 32, 28, 8, 2] },
    BuiltinElement { atomic_number: 99, symbol: "Es", name: "Einsteinium", shells: &[2, 8, 18, 32, 29, 8, 2] },
    BuiltinElement { atomic_number: 100, symbol: "Fm", name: "Fermium", shells: &[2, 8, 18, 32, 30, 8, 2] },
    BuiltinElement { atomic_number: 101, symbol: "Md", name: "Mendelevium", shells: &[2, 8, 18, 32, 31, 8, 2] },
    BuiltinElement { atomic_number: 102, symbol: "No", name: "Nobelium", shells: &[2, 8, 18, 32, 32, 8, 2] },
    BuiltinElement { atomic_number: 103, symbol: "Lr", name: "Lawrencium", shells: &[2, 8, 18, 32, 32, 8, 3] },
    BuiltinElement { atomic_number: 104, symbol: "Rf", name: "Rutherfordium", shells: &[2, 8, 18, 32, 32, 10, 2] },
    BuiltinElement { atomic_number: 105, symbol: "Db", name: "Dubnium", shells: &[2, 8, 18, 32, 32, 11, 2] },
    BuiltinElement { atomic_number: 106, symbol: "Sg", name: "Seaborgium", shells: &[2, 8, 18, 32, 32, 12, 2] },
    BuiltinElement { atomic_number: 107, symbol: "Bh", name: "Bohrium", shells: &[2, 8, 18, 32, 32, 13, 2] },
    BuiltinElement { atomic_number: 108, symbol: "Hs", name: "Hassium", shells: &[2, 8, 18, 32, 32, 14, 2] },
    BuiltinElement { atomic_number: 109, symbol: "Mt", name: "Meitnerium", shells: &[2, 8, 18, 32, 32, 15, 2] },
    BuiltinElement { atomic_number: 110, symbol: "Ds", name: "Darmstadtium", shells: &[2, 8, 18, 32, 32, 16, 2] },
    BuiltinElement { atomic_number: 111, symbol: "Rg", name: "Roentgenium", shells: &[2, 8, 18, 32, 32, 17, 2] },
    BuiltinElement { atomic_number: 112, symbol: "Cn", name: "Copernicium", shells: &[2, 8, 18, 32, 32, 18, 2] },
    BuiltinElement { atomic_number: 113, symbol: "Nh", name: "Nihonium", shells: &[2, 8, 18, 32, 32, 18, 3] },
    BuiltinElement { atomic_number: 114, symbol: "Fl", name: "Flerovium", shells: &[2, 8, 18, 32, 32, 18, 4] },
    BuiltinElement { atomic_number: 115, symbol: "Mc", name: "Moscovium", shells: &[2, 8, 18, 32, 32, 18, 5] },
    BuiltinElement { atomic_number: 116, symbol: "Lv", name: "Livermorium", shells: &[2, 8, 18, 32, 32, 18, 6] },
    BuiltinElement { atomic_number: 117, symbol: "Ts", name: "Tennessine", shells: &[2, 8, 18, 32, 32, 18, 7] },
    BuiltinElement { atomic_number: 118, symbol: "Og", name: "Oganesson", shells: &[2, 8, 18, 32, 32, 18, 8] },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_by_atomic_number() {
        for (i, element) in ELEMENTS.iter().enumerate() {
            assert_eq!(element.atomic_number as usize, i + 1, "{}", element.name);
        }
    }

    #[test]
    fn test_shells_sum_to_atomic_number() {
        for element in &ELEMENTS {
            let electrons: u32 = element.shells.iter().sum();
            assert_eq!(electrons, element.atomic_number, "{}", element.name);
        }
    }

    #[test]
    fn test_symbols_unique() {
        for (i, a) in ELEMENTS.iter().enumerate() {
            for b in &ELEMENTS[i + 1..] {
                assert!(!a.symbol.eq_ignore_ascii_case(b.symbol), "{}", a.symbol);
                assert!(!a.name.eq_ignore_ascii_case(b.name), "{}", a.name);
            }
        }
    }
}
