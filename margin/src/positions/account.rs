use common_structs::{AccountInfo, AccountValues, MarketInfo, Par, Wei};

use crate::{cache::Cache, helpers, oracle, storage, validation};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionAccountModule:
    storage::Storage
    + validation::ValidationModule
    + oracle::OracleModule
    + common_events::EventsModule
    + helpers::math::MathsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    fn get_account_par(&self, account: &AccountInfo<Self::Api>, market_id: u32) -> Par<Self::Api> {
        let mapper = self.account_par(&account.owner, account.number, market_id);
        if mapper.is_empty() {
            return Par::zero();
        }

        mapper.get()
    }

    /// Signed Wei balance of an account, valued at the snapshot index.
    fn get_account_wei(
        &self,
        account: &AccountInfo<Self::Api>,
        info: &MarketInfo<Self::Api>,
    ) -> Wei<Self::Api> {
        let par = self.get_account_par(account, info.market_id);
        self.par_to_wei(&info.index, &par)
    }

    /// Loads every market the account holds into the snapshot.
    fn load_account_markets(&self, cache: &mut Cache<Self>, account: &AccountInfo<Self::Api>) {
        cache.load_markets(self.account_markets(&account.owner, account.number).iter());
    }

    /// Supply and borrow value of an account over all the markets it holds.
    ///
    /// `value = wei * price`. Borrows are accumulated as absolute values.
    /// The account markets must already be part of the snapshot.
    fn get_account_values(
        &self,
        cache: &Cache<Self>,
        account: &AccountInfo<Self::Api>,
    ) -> AccountValues<Self::Api> {
        self.sum_account_values(cache, account, false)
    }

    /// Same as `get_account_values` with every borrow scaled by
    /// `1 + margin_premium(market)`, rounded up.
    ///
    /// Only used to decide collateralization, never to size a transfer.
    fn get_adjusted_account_values(
        &self,
        cache: &Cache<Self>,
        account: &AccountInfo<Self::Api>,
    ) -> AccountValues<Self::Api> {
        self.sum_account_values(cache, account, true)
    }

    fn sum_account_values(
        &self,
        cache: &Cache<Self>,
        account: &AccountInfo<Self::Api>,
        adjust_for_premium: bool,
    ) -> AccountValues<Self::Api> {
        let mut supply_value = BigUint::zero();
        let mut borrow_value = BigUint::zero();

        for market_id in self.account_markets(&account.owner, account.number).iter() {
            let info = cache.get_market_info(market_id);
            let wei = self.get_account_wei(account, &info);
            if wei.is_zero() {
                continue;
            }

            let value = &wei.value * &info.price;
            if wei.sign {
                supply_value += value;
            } else if adjust_for_premium {
                let premium = self.market_config(market_id).get().margin_premium;
                borrow_value += self.mul_fraction_round_up(&value, &self.one_plus(&premium));
            } else {
                borrow_value += value;
            }
        }

        AccountValues {
            supply_value,
            borrow_value,
        }
    }

    /// Whether the premium-adjusted values of the account satisfy the margin ratio.
    fn is_account_collateralized(
        &self,
        cache: &Cache<Self>,
        account: &AccountInfo<Self::Api>,
    ) -> bool {
        let values = self.get_adjusted_account_values(cache, account);
        self.is_collateralized(
            &values.supply_value,
            &values.borrow_value,
            &cache.risk_params.margin_ratio,
        )
    }
}
