mod layout_tests;
mod snap_decision_tests;
