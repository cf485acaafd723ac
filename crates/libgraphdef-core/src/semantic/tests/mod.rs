mod purity_tests;
mod struct_cycle_tests;
