use super::test_helpers::*;
use crate::cpu_65c816::*;

mod scenarios {
    use super::*;

    #[test]
    fn simple_load_and_halt() {
        let mut cpu = make_cpu(&[0xa9, 0x42, 0x42, 0xff]);
        assert_eq!(cpu.step(), 2, "LDA #$42");
        assert_eq!(cpu.step(), 3, "WDM #$FF");
        assert!(cpu.stopped);
        assert_eq!(lo(cpu.c), 0x42);
        assert_eq!(cpu.pc, PROGRAM_BASE as u16 + 4, "PC points past WDM");
        assert_eq!(cpu.total_cycles, 5);
        // A stopped interpreter refuses to step.
        assert_eq!(cpu.step(), 0);
        assert_eq!(cpu.total_cycles, 5);
    }

    #[test]
    fn emulation_to_native_transition() {
        // CLC, XCE, REP #$30, NOP, then halt. The carry comes back holding
        // the old E, and REP opens up both widths.
        let cpu = run_program(&[0x18, 0xfb, 0xc2, 0x30, 0xea]);
        assert!(!cpu.e);
        assert!(!cpu.is_status_flag_set(StatusFlag::MemoryWidth));
        assert!(!cpu.is_status_flag_set(StatusFlag::IndexWidth));
        assert_status(&cpu, I | C);
    }

    // SED, CLC, LDA #$19, ADC #$28 == $47 in BCD.
    register_c!(decimal_adc_simple, 0x47, P | D, [0xf8, 0x18, 0xa9, 0x19, 0x69, 0x28]);
    // $01 + $99 wraps to zero with the carry out.
    register_c!(decimal_adc_wrap, 0x00, P | D | C | Z, [0xf8, 0x18, 0xa9, 0x01, 0x69, 0x99]);

    #[test]
    fn block_move_mvn() {
        let mut program = vec![
            0x18, 0xfb, // CLC, XCE
            0xc2, 0x30, // REP #$30
            0xa2, 0x10, 0x00, // LDX #$0010
            0xa0, 0x20, 0x00, // LDY #$0020
            0xa9, 0x03, 0x00, // LDA #$0003
            0x54, 0x01, 0x01, // MVN $01,$01
        ];
        program.extend_from_slice(&HALT);
        let mut cpu = make_cpu(&program);
        let source = [0xde, 0xad, 0xbe, 0xef];
        for (i, value) in source.iter().enumerate() {
            cpu.bus.borrow_mut().load_u8(0x010010 + i as u32, *value);
        }

        run_with_invariants(&mut cpu);

        for (i, value) in source.iter().enumerate() {
            assert_eq!(cpu.bus.borrow().read_u8(0x010020 + i as u32), *value);
        }
        assert_eq!(cpu.x, 0x0014);
        assert_eq!(cpu.y, 0x0024);
        assert_eq!(cpu.c, 0xffff, "the count ran out past $FFFF");
        assert_eq!(cpu.dbr, 0x01, "the destination bank is latched into DBR");
    }

    #[test]
    fn block_move_costs_seven_cycles_per_byte() {
        let mut program = vec![
            0x18, 0xfb, 0xc2, 0x30, // to native, 16-bit everything
            0xa2, 0x10, 0x00, // LDX #$0010
            0xa0, 0x20, 0x00, // LDY #$0020
            0xa9, 0x01, 0x00, // LDA #$0001
            0x54, 0x01, 0x01, // MVN $01,$01 - two bytes
        ];
        program.extend_from_slice(&HALT);
        let mut cpu = make_cpu(&program);
        for _ in 0..6 {
            cpu.step();
        }
        let pc_at_move = cpu.pc;
        assert_eq!(cpu.step(), 7, "first byte");
        assert_eq!(cpu.pc, pc_at_move, "the opcode re-dispatches itself");
        assert_eq!(cpu.step(), 7, "second byte");
        assert_eq!(cpu.pc, pc_at_move.wrapping_add(3), "and then moves on");
    }

    #[test]
    fn stack_relative_addressing() {
        let mut cpu = make_cpu(&[
            0xa2, 0xff, // LDX #$FF
            0x9a, // TXS        -> SP = $01FF
            0xa9, 0xaa, // LDA #$AA
            0x48, // PHA
            0xa9, 0x00, // LDA #$00
            0xa3, 0x01, // LDA $01,S
            0x42, 0xff,
        ]);
        cpu.step();
        cpu.step();
        assert_eq!(cpu.sp, 0x01ff);
        cpu.step();
        assert_eq!(cpu.step(), 3, "PHA in emulation mode");
        cpu.step();
        assert_eq!(cpu.step(), 4, "LDA off,S");
        assert_eq!(lo(cpu.c), 0xaa);
    }

    #[test]
    fn interrupt_entry_native() {
        let mut cpu = make_cpu(&[0x18, 0xfb, 0x58, 0xea, 0xea]);
        {
            let mut bus = cpu.bus.borrow_mut();
            bus.load_u8(0x00ffee, 0x00);
            bus.load_u8(0x00ffef, 0x80);
        }
        cpu.step(); // CLC
        cpu.step(); // XCE
        cpu.step(); // CLI
        let pc_before = cpu.pc;
        let p_before = cpu.p;

        cpu.ier = 0x0001;
        cpu.assert_interrupt(0x0001);
        assert_eq!(cpu.step(), 8, "native IRQ entry");

        assert_eq!(cpu.pc, 0x8000);
        assert_eq!(cpu.pbr, 0);
        assert!(cpu.is_status_flag_set(StatusFlag::InterruptDisable));
        assert!(!cpu.is_status_flag_set(StatusFlag::Decimal));
        // Frame: PBR, PCH, PCL, P from the top of the stack down.
        let bus = cpu.bus.borrow();
        assert_eq!(bus.read_u8(0x0100), 0x00);
        assert_eq!(bus.read_u8(0x00ff), hi(pc_before));
        assert_eq!(bus.read_u8(0x00fe), lo(pc_before));
        assert_eq!(bus.read_u8(0x00fd), p_before);
    }

    #[test]
    fn nmi_entry_emulation() {
        let mut cpu = make_cpu(&[0xea, 0xea]);
        {
            let mut bus = cpu.bus.borrow_mut();
            bus.load_u8(0x00fffa, 0x00);
            bus.load_u8(0x00fffb, 0x88);
        }
        cpu.step(); // NOP
        let pc_before = cpu.pc;
        let p_before = cpu.p;

        // I is still set from reset; NMI enters anyway.
        assert_eq!(cpu.nmi(), 7, "emulation NMI entry");

        assert_eq!(cpu.pc, 0x8800);
        assert_eq!(cpu.pbr, 0);
        assert!(cpu.is_status_flag_set(StatusFlag::InterruptDisable));
        assert!(!cpu.is_status_flag_set(StatusFlag::Decimal));
        // Frame: PCH, PCL, then P with the break bit clear.
        let bus = cpu.bus.borrow();
        assert_eq!(bus.read_u8(0x0100), hi(pc_before));
        assert_eq!(bus.read_u8(0x01ff), lo(pc_before));
        assert_eq!(bus.read_u8(0x01fe), (p_before | 0x30) & !0x10);
    }

    #[test]
    fn nmi_entry_native() {
        let mut cpu = make_cpu(&[0x18, 0xfb, 0xea]);
        {
            let mut bus = cpu.bus.borrow_mut();
            bus.load_u8(0x00ffea, 0x00);
            bus.load_u8(0x00ffeb, 0x84);
        }
        cpu.step(); // CLC
        cpu.step(); // XCE
        let pc_before = cpu.pc;
        let p_before = cpu.p;

        assert_eq!(cpu.nmi(), 8, "native NMI entry");

        assert_eq!(cpu.pc, 0x8400);
        assert_eq!(cpu.pbr, 0);
        assert!(cpu.is_status_flag_set(StatusFlag::InterruptDisable));
        // Frame: PBR, PCH, PCL, P, exactly as an IRQ stacks them.
        let bus = cpu.bus.borrow();
        assert_eq!(bus.read_u8(0x0100), 0x00);
        assert_eq!(bus.read_u8(0x00ff), hi(pc_before));
        assert_eq!(bus.read_u8(0x00fe), lo(pc_before));
        assert_eq!(bus.read_u8(0x00fd), p_before);
    }

    #[test]
    fn abort_entry_emulation() {
        let mut cpu = make_cpu(&[0xea, 0xea]);
        {
            let mut bus = cpu.bus.borrow_mut();
            bus.load_u8(0x00fff8, 0x00);
            bus.load_u8(0x00fff9, 0x8c);
        }
        cpu.step(); // NOP
        let pc_before = cpu.pc;
        let p_before = cpu.p;

        assert_eq!(cpu.abort(), 7, "emulation ABORT entry");

        assert_eq!(cpu.pc, 0x8c00);
        assert_eq!(cpu.pbr, 0);
        assert!(cpu.is_status_flag_set(StatusFlag::InterruptDisable));
        let bus = cpu.bus.borrow();
        assert_eq!(bus.read_u8(0x0100), hi(pc_before));
        assert_eq!(bus.read_u8(0x01ff), lo(pc_before));
        assert_eq!(bus.read_u8(0x01fe), (p_before | 0x30) & !0x10);
    }

    #[test]
    fn abort_entry_native() {
        let mut cpu = make_cpu(&[0x18, 0xfb, 0xea]);
        {
            let mut bus = cpu.bus.borrow_mut();
            bus.load_u8(0x00ffe8, 0x00);
            bus.load_u8(0x00ffe9, 0x8e);
        }
        cpu.step(); // CLC
        cpu.step(); // XCE
        let pc_before = cpu.pc;
        let p_before = cpu.p;

        assert_eq!(cpu.abort(), 8, "native ABORT entry");

        assert_eq!(cpu.pc, 0x8e00);
        assert_eq!(cpu.pbr, 0);
        assert!(cpu.is_status_flag_set(StatusFlag::InterruptDisable));
        let bus = cpu.bus.borrow();
        assert_eq!(bus.read_u8(0x0100), 0x00);
        assert_eq!(bus.read_u8(0x00ff), hi(pc_before));
        assert_eq!(bus.read_u8(0x00fe), lo(pc_before));
        assert_eq!(bus.read_u8(0x00fd), p_before);
    }

    #[test]
    fn nmi_wakes_a_waiting_cpu() {
        let mut cpu = make_cpu(&[0xcb, 0xa9, 0x66, 0x42, 0xff]);
        {
            let mut bus = cpu.bus.borrow_mut();
            bus.load_u8(0x00fffa, 0x00);
            bus.load_u8(0x00fffb, 0x88);
            bus.load_u8(0x008800, 0x40); // RTI
        }
        cpu.step(); // WAI
        assert!(cpu.waiting);
        cpu.nmi();
        assert!(!cpu.waiting);
        assert_eq!(cpu.pc, 0x8800);
        cpu.step(); // RTI lands after the WAI
        assert_eq!(cpu.pc, PROGRAM_BASE as u16 + 1);
        run_with_invariants(&mut cpu);
        assert_eq!(lo(cpu.c), 0x66);
    }

    #[test]
    fn wai_wakes_on_masked_interrupt() {
        let mut cpu = make_cpu(&[0xcb, 0xa9, 0x55, 0x42, 0xff]);
        assert_eq!(cpu.step(), 3, "WAI");
        assert!(cpu.waiting);
        assert_eq!(cpu.step(), 0, "nothing pending yet");

        cpu.ier = 0x0001;
        cpu.assert_interrupt(0x0001);
        // I is still set from reset, so execution just continues after WAI.
        assert_eq!(cpu.step(), 2);
        assert!(!cpu.waiting);
        assert_eq!(lo(cpu.c), 0x55);
    }

    #[test]
    fn irq_wakes_wai_into_the_handler() {
        let mut cpu = make_cpu(&[0x58, 0xcb, 0xea]);
        {
            let mut bus = cpu.bus.borrow_mut();
            bus.load_u8(0x00fffe, 0x00);
            bus.load_u8(0x00ffff, 0x90);
        }
        cpu.step(); // CLI
        assert_eq!(cpu.step(), 3, "WAI");
        assert_eq!(cpu.step(), 0);

        cpu.ier = 0x0001;
        cpu.assert_interrupt(0x0001);
        assert_eq!(cpu.step(), 7, "emulation IRQ entry");
        assert_eq!(cpu.pc, 0x9000);
        // The stacked return address is the instruction after WAI, and the
        // stacked P has the break bit clear.
        let bus = cpu.bus.borrow();
        assert_eq!(bus.read_u8(0x0100), 0x20);
        assert_eq!(bus.read_u8(0x01ff), 0x02);
        assert_eq!(bus.read_u8(0x01fe) & 0x10, 0);
    }
}

mod laws {
    use super::*;

    // LDA #$C7, PHA, LDA #$00, PLA: the accumulator survives the round
    // trip and N/Z reflect it.
    register_c!(push_then_pull, 0xc7, P | N, [0xa9, 0xc7, 0x48, 0xa9, 0x00, 0x68]);

    #[test]
    fn flag_round_trip() {
        // SEC, SED, PHP, CLC, CLD, PLP.
        let cpu = run_program(&[0x38, 0xf8, 0x08, 0x18, 0xd8, 0x28]);
        assert_status(&cpu, P | C | D);
    }

    #[test]
    fn xce_twice_is_a_no_op() {
        let cpu = run_program(&[0x18, 0xfb, 0xfb]);
        assert!(cpu.e);
        assert_status(&cpu, P);
    }

    #[test]
    fn sec_xce_forces_emulation() {
        // Down to native first, then SEC, XCE pins E=1 from any start.
        let cpu = run_program(&[0x18, 0xfb, 0x38, 0xfb]);
        assert!(cpu.e);
        assert!(cpu.is_status_flag_set(StatusFlag::MemoryWidth));
        assert!(cpu.is_status_flag_set(StatusFlag::IndexWidth));
        assert_eq!(cpu.sp & 0xff00, 0x0100);
    }

    // SEC, LDA #$37, ADC #$13, SBC #$13 restores A with the carry set.
    register_c!(adc_sbc_inverse, 0x37, P | C, [0x38, 0xa9, 0x37, 0x69, 0x13, 0xe9, 0x13]);
}

mod boundaries {
    use super::*;

    #[test]
    fn direct_page_wraps_in_emulation_mode() {
        // B:A = $02:$00, TCD: the direct page sits at $0200 with a zero
        // low byte, so emulation mode wraps $FF inside the page.
        let mut cpu = make_cpu(&[
            0xa9, 0x02, // LDA #$02
            0xeb, // XBA
            0xa9, 0x00, // LDA #$00
            0x5b, // TCD
            0xa5, 0xff, // LDA $FF
            0x42, 0xff,
        ]);
        {
            let mut bus = cpu.bus.borrow_mut();
            bus.load_u8(0x0002ff, 0xab);
            bus.load_u8(0x000300, 0x77);
        }
        run_with_invariants(&mut cpu);
        assert_eq!(cpu.dp, 0x0200);
        assert_eq!(lo(cpu.c), 0xab, "reads $02FF, not $0300");
    }

    #[test]
    fn direct_page_indirect_wraps_the_pointer_pair() {
        // LDA ($FF) with DP=$0200: the pointer's low byte comes from $02FF
        // and its high byte wraps back to $0200.
        let mut cpu = make_cpu(&[
            0xa9, 0x02, 0xeb, 0xa9, 0x00, 0x5b, // DP = $0200
            0xb2, 0xff, // LDA ($FF)
            0x42, 0xff,
        ]);
        {
            let mut bus = cpu.bus.borrow_mut();
            bus.load_u8(0x0002ff, 0x34);
            bus.load_u8(0x000200, 0x12);
            bus.load_u8(0x001234, 0x5a);
        }
        run_with_invariants(&mut cpu);
        assert_eq!(lo(cpu.c), 0x5a);
    }

    #[test]
    fn nonzero_direct_page_low_byte_costs_a_cycle() {
        // DP = $0201: no wrap, but every direct-page access pays a cycle.
        let mut cpu = make_cpu(&[
            0xa9, 0x02, 0xeb, 0xa9, 0x01, 0x5b, // DP = $0201
            0xa5, 0x10, // LDA $10
            0x42, 0xff,
        ]);
        for _ in 0..3 {
            cpu.step();
        }
        assert_eq!(cpu.step(), 2, "TCD");
        assert_eq!(cpu.step(), 4, "LDA dp with DP.l != 0");
    }

    #[test]
    fn branch_page_cross_costs_a_cycle_only_in_emulation() {
        // Taken BNE from $20F0 to $2112 crosses a page.
        let mut cpu = make_cpu(&[]);
        {
            let mut bus = cpu.bus.borrow_mut();
            bus.load_u8(0x0020f0, 0xd0);
            bus.load_u8(0x0020f1, 0x20);
        }
        cpu.pc = 0x20f0;
        assert_eq!(cpu.step(), 4, "2 base + taken + page cross");
        assert_eq!(cpu.pc, 0x2112);

        let mut cpu = make_cpu(&[0x18, 0xfb]);
        cpu.step();
        cpu.step();
        {
            let mut bus = cpu.bus.borrow_mut();
            bus.load_u8(0x0020f0, 0xd0);
            bus.load_u8(0x0020f1, 0x20);
        }
        cpu.pc = 0x20f0;
        assert_eq!(cpu.step(), 3, "native mode has no page penalty");
        assert_eq!(cpu.pc, 0x2112);
    }

    #[test]
    fn branch_cycles_in_page() {
        let mut cpu = make_cpu(&[0xd0, 0x05]);
        assert_eq!(cpu.step(), 3, "taken, same page");
        assert_eq!(cpu.pc, 0x2007);

        let mut cpu = make_cpu(&[0xa9, 0x00, 0xd0, 0x05, 0x42, 0xff]);
        cpu.step();
        assert_eq!(cpu.step(), 2, "not taken");
        assert_eq!(cpu.pc, 0x2004);
    }

    #[test]
    fn block_move_count_rollover_copies_one_byte() {
        let mut program = vec![
            0x18, 0xfb, 0xc2, 0x30, // to native
            0xa2, 0x40, 0x00, // LDX #$0040
            0xa0, 0x50, 0x00, // LDY #$0050
            0xa9, 0x00, 0x00, // LDA #$0000
            0x54, 0x00, 0x00, // MVN $00,$00
        ];
        program.extend_from_slice(&HALT);
        let mut cpu = make_cpu(&program);
        cpu.bus.borrow_mut().load_u8(0x000040, 0x99);

        run_with_invariants(&mut cpu);

        assert_eq!(cpu.bus.borrow().read_u8(0x000050), 0x99);
        assert_eq!(cpu.c, 0xffff, "C rolled from $0000 to $FFFF");
        assert_eq!(cpu.x, 0x0041);
        assert_eq!(cpu.y, 0x0051);
        assert!(cpu.stopped, "the move did not re-execute");
    }

    #[test]
    fn plp_with_x_set_truncates_the_index_registers() {
        let cpu = run_program(&[
            0x18, 0xfb, // to native
            0xc2, 0x10, // REP #$10 - 16-bit indexes
            0xa2, 0x34, 0x12, // LDX #$1234
            0xa0, 0x78, 0x56, // LDY #$5678
            0xf4, 0x30, 0x30, // PEA $3030
            0x28, // PLP - pulls $30: M and X set
        ]);
        assert!(cpu.is_status_flag_set(StatusFlag::IndexWidth));
        assert_eq!(cpu.x, 0x0034);
        assert_eq!(cpu.y, 0x0078);
    }

    #[test]
    fn jmp_indirect_reads_the_pointer_from_bank_zero() {
        let mut cpu = make_cpu(&[]);
        {
            let mut bus = cpu.bus.borrow_mut();
            bus.load_u8(0x00abcd, 0x56);
            bus.load_u8(0x00abce, 0x34);
            // JMP ($ABCD) executing from bank 2.
            bus.load_u8(0x022000, 0x6c);
            bus.load_u8(0x022001, 0xcd);
            bus.load_u8(0x022002, 0xab);
        }
        cpu.pbr = 0x02;
        cpu.pc = 0x2000;
        assert_eq!(cpu.step(), 5);
        assert_eq!(cpu.pc, 0x3456);
        assert_eq!(cpu.pbr, 0x02, "JMP never changes the program bank");
    }
}

mod arithmetic {
    use super::*;

    // The binary ADC overflow cases from http://www.6502.org/tutorials/vflag.html
    register_c!(adc_1_plus_1, 0x02, P, [0x18, 0xa9, 0x01, 0x69, 0x01]);
    register_c!(adc_1_plus_minus1, 0x00, P | C | Z, [0x18, 0xa9, 0x01, 0x69, 0xff]);
    register_c!(adc_127_plus_1, 0x80, P | V | N, [0x18, 0xa9, 0x7f, 0x69, 0x01]);
    register_c!(adc_minus128_plus_minus1, 0x7f, P | C | V, [0x18, 0xa9, 0x80, 0x69, 0xff]);
    register_c!(sbc_0_minus_1, 0xff, P | N, [0x38, 0xa9, 0x00, 0xe9, 0x01]);
    register_c!(sbc_minus128_minus_1, 0x7f, P | C | V, [0x38, 0xa9, 0x80, 0xe9, 0x01]);

    // SED, SEC, LDA #$47, SBC #$28 == $19 in BCD with no borrow.
    register_c!(decimal_sbc, 0x19, P | D | C, [0xf8, 0x38, 0xa9, 0x47, 0xe9, 0x28]);
    // $00 - $01 borrows down to $99.
    register_c!(decimal_sbc_borrow, 0x99, P | D | N, [0xf8, 0x38, 0xa9, 0x00, 0xe9, 0x01]);

    #[test]
    fn decimal_adc_16bit() {
        let mut cpu = make_cpu(&[
            0x18, 0xfb, 0xc2, 0x30, // to native, 16-bit
            0xf8, 0x18, // SED, CLC
            0xa9, 0x34, 0x12, // LDA #$1234
            0x69, 0x66, 0x08, // ADC #$0866
            0x42, 0xff,
        ]);
        run_with_invariants(&mut cpu);
        assert_eq!(cpu.c, 0x2100, "1234 + 0866 = 2100 in BCD");
        assert!(!cpu.is_status_flag_set(StatusFlag::Carry));
        assert!(!cpu.is_status_flag_set(StatusFlag::Zero));
    }

    #[test]
    fn cmp_is_binary_even_in_decimal_mode() {
        // SED, LDA #$20, CMP #$1A: binary $20 >= $1A.
        let cpu = run_program(&[0xf8, 0xa9, 0x20, 0xc9, 0x1a]);
        assert_status(&cpu, P | D | C);
    }

    #[test]
    fn trb_tsb() {
        let mut cpu = make_cpu(&[
            0xa9, 0x0f, // LDA #$0F
            0x04, 0x10, // TSB $10
            0xa9, 0x03, // LDA #$03
            0x14, 0x10, // TRB $10
            0x42, 0xff,
        ]);
        cpu.bus.borrow_mut().load_u8(0x000010, 0x30);
        run_with_invariants(&mut cpu);
        assert_eq!(cpu.bus.borrow().read_u8(0x000010), 0x3c);
        // The final TRB saw $3F & $03 != 0, so Z is clear.
        assert!(!cpu.is_status_flag_set(StatusFlag::Zero));
    }
}

mod control {
    use super::*;

    #[test]
    fn jsr_and_rts() {
        let mut cpu = make_cpu(&[
            0x20, 0x06, 0x20, // JSR $2006
            0x42, 0xff, // halt on return
            0xea, // padding
            0x60, // $2006: RTS
        ]);
        assert_eq!(cpu.step(), 6, "JSR");
        assert_eq!(cpu.pc, 0x2006);
        // The address of the JSR's last byte is on the stack.
        assert_eq!(cpu.bus.borrow().read_word(0x01ff, 0x0100), 0x2002);
        assert_eq!(cpu.step(), 6, "RTS");
        assert_eq!(cpu.pc, 0x2003);
    }

    #[test]
    fn jsl_and_rtl() {
        let mut cpu = make_cpu(&[
            0x22, 0x45, 0x23, 0x01, // JSL $012345
            0x42, 0xff,
        ]);
        cpu.bus.borrow_mut().load_u8(0x012345, 0x6b); // RTL
        assert_eq!(cpu.step(), 8, "JSL");
        assert_eq!(cpu.pbr, 0x01);
        assert_eq!(cpu.pc, 0x2345);
        assert_eq!(cpu.step(), 6, "RTL");
        assert_eq!(cpu.pbr, 0x00);
        assert_eq!(cpu.pc, 0x2004);
        cpu.step();
        assert!(cpu.stopped);
    }

    #[test]
    fn brk_and_rti_in_emulation_mode() {
        let mut cpu = make_cpu(&[
            0xea, // NOP
            0x00, 0x00, // BRK with its signature byte
            0x42, 0xff, // the handler returns here
        ]);
        {
            let mut bus = cpu.bus.borrow_mut();
            bus.load_u8(0x00fffe, 0x00);
            bus.load_u8(0x00ffff, 0x90);
            bus.load_u8(0x009000, 0x40); // RTI
        }
        cpu.step();
        assert_eq!(cpu.step(), 7, "BRK in emulation mode");
        assert_eq!(cpu.pc, 0x9000);
        // The pushed P image carries the break bit.
        assert_eq!(cpu.bus.borrow().read_u8(0x01fe) & 0x10, 0x10);
        assert_eq!(cpu.step(), 6, "RTI in emulation mode");
        assert_eq!(cpu.pc, 0x2003, "returns past the signature byte");
        assert!(
            !cpu.is_status_flag_set(StatusFlag::InterruptDisable),
            "emulation-mode RTI re-enables interrupts"
        );
        cpu.step();
        assert!(cpu.stopped);
    }

    #[test]
    fn per_pushes_a_pc_relative_address() {
        let mut cpu = make_cpu(&[
            0x62, 0x10, 0x00, // PER $+16
            0x42, 0xff,
        ]);
        assert_eq!(cpu.step(), 6, "PER");
        // PC after the operand is $2003; plus $10 is $2013.
        assert_eq!(cpu.bus.borrow().read_word(0x01ff, 0x0100), 0x2013);
    }

    #[test]
    fn pei_pushes_the_direct_page_word() {
        let mut cpu = make_cpu(&[
            0xd4, 0x20, // PEI ($20)
            0x42, 0xff,
        ]);
        {
            let mut bus = cpu.bus.borrow_mut();
            bus.load_u8(0x000020, 0xcd);
            bus.load_u8(0x000021, 0xab);
        }
        assert_eq!(cpu.step(), 6, "PEI");
        assert_eq!(cpu.bus.borrow().read_word(0x01ff, 0x0100), 0xabcd);
    }
}

mod widths {
    use super::*;

    #[test]
    fn immediate_widths_follow_the_mode_bits() {
        let mut cpu = make_cpu(&[
            0x18, 0xfb, // to native
            0xc2, 0x30, // REP #$30
            0xa9, 0x34, 0x12, // LDA #$1234
            0xa2, 0xcd, 0xab, // LDX #$ABCD
            0xe2, 0x20, // SEP #$20 - back to an 8-bit accumulator
            0xa9, 0xff, // LDA #$FF - one operand byte again
            0x42, 0xff,
        ]);
        cpu.step();
        cpu.step();
        assert_eq!(cpu.step(), 3, "REP");
        assert_eq!(cpu.step(), 3, "16-bit immediate load pays a cycle");
        assert_eq!(cpu.c, 0x1234);
        assert_eq!(cpu.step(), 3);
        assert_eq!(cpu.x, 0xabcd);
        assert_eq!(cpu.step(), 3, "SEP");
        assert_eq!(cpu.step(), 2, "8-bit immediate load");
        assert_eq!(cpu.c, 0x12ff, "B is preserved over an 8-bit load");
        run_with_invariants(&mut cpu);
    }

    #[test]
    fn sep_truncates_the_index_registers() {
        let cpu = run_program(&[
            0x18, 0xfb, // to native
            0xc2, 0x30, // REP #$30
            0xa2, 0x34, 0x12, // LDX #$1234
            0xe2, 0x10, // SEP #$10
        ]);
        assert_eq!(cpu.x, 0x0034);
        assert!(cpu.is_status_flag_set(StatusFlag::IndexWidth));
        assert!(!cpu.is_status_flag_set(StatusFlag::MemoryWidth));
    }

    #[test]
    fn tax_with_16bit_index_copies_the_whole_accumulator() {
        let mut cpu = make_cpu(&[
            0x18, 0xfb, // to native
            0xc2, 0x10, // REP #$10 - 16-bit indexes, 8-bit accumulator
            0xa9, 0x7f, // LDA #$7F
            0xeb, // XBA        -> C = $7F00
            0xa9, 0x22, // LDA #$22   -> C = $7F22
            0xaa, // TAX
            0x42, 0xff,
        ]);
        run_with_invariants(&mut cpu);
        assert_eq!(cpu.x, 0x7f22);
    }

    #[test]
    fn xba_swaps_the_accumulator_halves() {
        let cpu = run_program(&[0xa9, 0x12, 0xeb]);
        assert_eq!(cpu.c, 0x1200);
        assert_status(&cpu, P | Z);
    }

    #[test]
    fn sixteen_bit_pull_sets_flags_from_the_whole_word() {
        let mut cpu = make_cpu(&[
            0x18, 0xfb, 0xc2, 0x30, // to native, 16-bit
            0xa9, 0x00, 0x80, // LDA #$8000
            0x48, // PHA
            0xa9, 0x00, 0x00, // LDA #$0000
            0x68, // PLA
            0x42, 0xff,
        ]);
        for _ in 0..6 {
            cpu.step();
        }
        assert_eq!(cpu.step(), 5, "16-bit PLA");
        assert_eq!(cpu.c, 0x8000);
        assert!(cpu.is_status_flag_set(StatusFlag::Negative));
        assert!(!cpu.is_status_flag_set(StatusFlag::Zero));
    }
}

mod cycles {
    use super::*;

    #[test]
    fn implied_and_stack_costs() {
        let mut cpu = make_cpu(&[0xea, 0xeb, 0x0b, 0x2b, 0x42, 0xff]);
        assert_eq!(cpu.step(), 2, "NOP");
        assert_eq!(cpu.step(), 3, "XBA");
        assert_eq!(cpu.step(), 4, "PHD");
        assert_eq!(cpu.step(), 5, "PLD");
    }

    #[test]
    fn rmw_widths() {
        // INC $10 is 5 cycles with an 8-bit accumulator, 7 with 16.
        let mut cpu = make_cpu(&[0xe6, 0x10, 0x18, 0xfb, 0xc2, 0x20, 0xe6, 0x10, 0x42, 0xff]);
        assert_eq!(cpu.step(), 5, "8-bit INC dp");
        cpu.step();
        cpu.step();
        cpu.step();
        assert_eq!(cpu.step(), 7, "16-bit INC dp");
        assert_eq!(cpu.bus.borrow().read_word(0x000010, 0x000011), 0x0002);
    }
}
